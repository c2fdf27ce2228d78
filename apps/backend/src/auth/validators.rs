//! Structural checks for submitted credentials.

use lazy_regex::regex_is_match;

pub const MIN_USERNAME_LENGTH: usize = 6;
pub const MAX_USERNAME_LENGTH: usize = 30;
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 100;

/// Bare RFC 5322 `addr-spec` with dot-atom local part and domain, at most
/// `MAX_EMAIL_LENGTH` bytes.
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LENGTH
        && regex_is_match!(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$",
            email
        )
}

pub fn is_valid_username(username: &str) -> bool {
    (MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&username.chars().count())
}

pub fn is_valid_password(password: &str) -> bool {
    (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&password.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        let cases = [
            ("test@example.com", true),
            ("user.name+tag+sorting@example.com", true),
            ("user@example", true),
            ("user@.com", false),
            ("user@com", true),
            ("user@example..com", false),
            ("", false),
            ("a@b.c", true),
            ("email@subdomain.example.com", true),
            ("email@example.co.jp", true),
            ("email@-example.com", true),
            (".leading@example.com", false),
            ("trailing.@example.com", false),
            ("two@@example.com", false),
            ("with space@example.com", false),
            ("plainaddress", false),
            ("@missinguser.com", false),
            ("missingdomain@", false),
        ];

        for (email, expected) in cases {
            assert_eq!(is_valid_email(email), expected, "is_valid_email({email:?})");
        }
    }

    #[test]
    fn test_email_length_boundary() {
        let at_max = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH - 12));
        let over_max = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH - 11));
        assert_eq!(at_max.len(), MAX_EMAIL_LENGTH);
        assert!(is_valid_email(&at_max));
        assert!(!is_valid_email(&over_max));

        let long_local = format!("{}@example.com", "a".repeat(101));
        assert!(!is_valid_email(&long_local));
    }

    #[test]
    fn test_is_valid_username() {
        let cases = [
            ("short".to_string(), false),
            ("validusername".to_string(), true),
            ("a".repeat(MIN_USERNAME_LENGTH), true),
            ("a".repeat(MAX_USERNAME_LENGTH), true),
            ("a".repeat(MAX_USERNAME_LENGTH + 1), false),
            (String::new(), false),
            ("valid_username".to_string(), true),
        ];

        for (username, expected) in cases {
            assert_eq!(is_valid_username(&username), expected, "{username:?}");
        }
    }

    #[test]
    fn test_is_valid_password() {
        let cases = [
            ("short".to_string(), false),
            ("validpassword".to_string(), true),
            ("a".repeat(MIN_PASSWORD_LENGTH), true),
            ("a".repeat(MAX_PASSWORD_LENGTH), true),
            ("a".repeat(MAX_PASSWORD_LENGTH + 1), false),
            (String::new(), false),
            ("valid_password123".to_string(), true),
        ];

        for (password, expected) in cases {
            assert_eq!(is_valid_password(&password), expected, "{password:?}");
        }
    }

    #[test]
    fn test_lengths_count_characters() {
        // six characters, twelve bytes
        assert!(is_valid_username("éééééé"));
    }
}

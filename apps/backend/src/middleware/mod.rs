pub mod pre_auth;
pub mod request_trace;
pub mod session;
pub mod structured_logger;
pub mod trace_span;

pub use pre_auth::RedirectIfAuthenticated;
pub use request_trace::RequestTrace;
pub use session::SessionGate;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;

//! Failure events, compiled in only with the `tracing` feature.

#[cfg(feature = "tracing")]
macro_rules! trace_failure {
    ($op:expr, $ty:ty, $err:expr) => {{
        let op: &str = $op;
        let err = &$err;
        tracing::trace!(
            op,
            payload = core::any::type_name::<$ty>(),
            error = %err,
            "optional box operation failed"
        );
    }};
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_failure {
    ($op:expr, $ty:ty, $err:expr) => {{
        let _ = $op;
    }};
}

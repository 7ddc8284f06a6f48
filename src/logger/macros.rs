//! Call-site macros that fill in `file!()` and `line!()`.

#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr $(, $part:expr)* $(,)?) => {
        $logger.log(
            $level,
            ::std::file!(),
            ::std::line!(),
            &[$(&$part as &dyn ::std::fmt::Display),*],
        )
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::logger::LogLevel::Debug $(, $part)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::logger::LogLevel::Info $(, $part)*)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::logger::LogLevel::Warning $(, $part)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::logger::LogLevel::Error $(, $part)*)
    };
}

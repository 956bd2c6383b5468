#[cfg(feature = "binary")]
mod init;

#[cfg(feature = "binary")]
pub use init::{LogError, Logger, LoggerBuilder};
#[cfg(feature = "binary")]
pub use tests::for_tests;

pub mod prelude {
    pub use slog_scope::crit;
    pub use slog_scope::debug;
    pub use slog_scope::error;
    pub use slog_scope::info;
    pub use slog_scope::trace;
    pub use slog_scope::warn;

    pub use slog::{self, o, Drain as SlogDrain, Key, Level as MyLevel, Record, Serializer};

    pub use slog_scope::{self, logger};
}

#[macro_export]
macro_rules! slog_value_display {
    ($ty:ty) => {
        impl $crate::prelude::slog::Value for $ty {
            fn serialize(
                &self,
                _: &$crate::prelude::slog::Record,
                key: $crate::prelude::slog::Key,
                serializer: &mut dyn $crate::prelude::slog::Serializer,
            ) -> $crate::prelude::slog::Result<()> {
                serializer.emit_arguments(key, &format_args!("{}", self))
            }
        }
    };
}

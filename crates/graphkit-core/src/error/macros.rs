//! Error macros for graphkit

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting an item that is already tracked
#[macro_export]
macro_rules! bail_present {
    ($context:expr, $item:expr) => {
        return Err($crate::error::GraphError::already_present($context, $item))
    };
}

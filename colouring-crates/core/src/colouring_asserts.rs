#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const COLOURING_ASSERT_LEVEL_DEFINITION: u8 = COLOURING_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const COLOURING_ASSERT_LEVEL_DEFINITION: u8 = COLOURING_ASSERT_ADVANCED;

pub const COLOURING_ASSERT_SIMPLE: u8 = 1;
pub const COLOURING_ASSERT_MODERATE: u8 = 2;
pub const COLOURING_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! colouring_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::COLOURING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::COLOURING_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! colouring_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::COLOURING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::COLOURING_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! colouring_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::COLOURING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::COLOURING_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

/// Expensive checks, such as re-validating a whole colouring after search; only active in tests
/// or with the `debug-checks` feature.
#[macro_export]
#[doc(hidden)]
macro_rules! colouring_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::COLOURING_ASSERT_LEVEL_DEFINITION >= $crate::asserts::COLOURING_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

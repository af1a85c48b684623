//! Bounded - macro for range-constrained f32 newtypes
//!
//! `new` is const and rejects out-of-range literals at compile time when
//! used in a const context.

/// Creates a bounded f32 type with inclusive min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Opacity, 0.0, 1.0);
/// const HALF: Opacity = Opacity::new(0.5);
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }
        }
    };
}

pub(crate) use bounded_f32;

#[cfg(test)]
mod tests {
    bounded_f32!(TestUnit, 0.0, 1.0);

    const HALF: TestUnit = TestUnit::new(0.5);

    #[test]
    fn bounded_const_valid() {
        assert_eq!(HALF.0, 0.5);
        assert!(TestUnit::new(TestUnit::MIN) < HALF);
        assert!(HALF < TestUnit::new(TestUnit::MAX));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn bounded_rejects_invalid() {
        let _ = TestUnit::new(1.01);
    }
}

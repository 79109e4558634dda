//! Custom macro definitions

#[macro_export]
/// Assert macro to check whether to floats are equal within a given tolerance
macro_rules! assert_fuzzy_eq {
    ( $ left : expr , $ right : expr, $ tol : expr ) => {{
        match (&($left), &($right), &($tol)) {
            (left_val, right_val, tol) => {
                if !((*left_val - *right_val).abs() < *tol) {
                    panic!(
                        "assertion failed: left differs from right by more than `{:?}` \
                                   (left: `{:?}`, right: `{:?}`)",
                        *tol, *left_val, *right_val
                    )
                }
            }
        }
    }};
}

#[macro_export]
/// Assert macro to check whether two instants are at most a given `chrono::Duration` apart
macro_rules! assert_close_in_time {
    ( $ left : expr , $ right : expr, $ tol : expr ) => {{
        match (&($left), &($right), &($tol)) {
            (left_val, right_val, tol) => {
                let diff = if *left_val > *right_val {
                    *left_val - *right_val
                } else {
                    *right_val - *left_val
                };
                if diff > *tol {
                    panic!(
                        "assertion failed: left and right are more than `{}` apart \
                                   (left: `{}`, right: `{}`)",
                        *tol, *left_val, *right_val
                    )
                }
            }
        }
    }};
}

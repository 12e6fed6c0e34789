// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! delta {
    // Stat delta shorthand: delta![TwoPm => 1, TwoPa => 1]

    // Empty → recognized action with no stat
    () => {
        &[]
    };
    ($($stat:ident => $n:expr),+ $(,)?) => {
        &[ $( ($crate::stats::Stat::$stat, $n) ),+ ]
    };
}

// src/macros.rs
#[macro_export]
macro_rules! s {
    // Owned String shorthand.

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Anything that converts into a String
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate string slices into one owned String.
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

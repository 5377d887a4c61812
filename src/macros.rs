// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literal, const or variable
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! num {
    // Option<f64> → fixed decimals, empty when absent.
    ($opt:expr, $prec:expr) => {
        match $opt {
            ::std::option::Option::Some(v) => format!("{:.*}", $prec, v),
            ::std::option::Option::None => ::std::string::String::new(),
        }
    };
}

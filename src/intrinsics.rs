/// Expands to a doc string pointing at a section of the JVM specification.
macro_rules! see_jvm_spec {
    ($sec:literal $(, $sub_sec:literal )*) => {
        concat!(
            "See the [JVM Specification §",
            $sec $(, ".", $sub_sec)*,
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $sec,
            ".html#jvms-",
            $sec $(, ".", $sub_sec)*,
            ") for more information."
        )
    };
}

pub(crate) use see_jvm_spec;

pub mod compile_time {
    pub mod lexical {
        /// Sentinel appended to the source text before scanning.
        ///
        /// The scanner assumes the last character of its input is this
        /// sentinel and never reads past it.
        pub const SOURCE_SENTINEL: char = '\0';

        /// Characters that terminate a Tiny string literal with an error.
        pub const ILLEGAL_STRING_CHARACTERS: [char; 5] = ['\n', '\t', '\r', '\\', '%'];
    }

    pub mod emit {
        /// Default path for the emitted C translation unit.
        pub const DEFAULT_OUTPUT_PATH: &str = "out.c";

        /// Fixed header prologue: standard I/O declaration + entry point.
        pub const C_PROLOGUE: [&str; 2] = ["#include <stdio.h>", "int main(void){"];

        /// Fixed body epilogue closing the entry point.
        pub const C_EPILOGUE: [&str; 2] = ["return 0;", "}"];

        /// Every Tiny variable is declared with this single C type.
        pub const C_VARIABLE_TYPE: &str = "float";

        /// Opening fragment of the numeric PRINT translation; the translated
        /// expression is emitted between this and `C_NUMERIC_PRINT_CLOSE`.
        pub const C_NUMERIC_PRINT_OPEN: &str = "printf(\"%.2f\\n\", (float)(";
        pub const C_NUMERIC_PRINT_CLOSE: &str = "));";
    }

    pub mod driver {
        /// C compiler invoked on the emitted output.
        pub const DEFAULT_C_COMPILER: &str = "cc";

        /// Extension expected for Tiny source files (informational only).
        pub const SOURCE_EXTENSION: &str = "tiny";
    }
}

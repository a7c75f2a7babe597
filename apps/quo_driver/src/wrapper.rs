//! Wraps translated C++ member text into a compilable translation unit.
//!
//! The exact layout here is not part of any contract the rest of the
//! workspace depends on — only that the result is valid C++ the discovered
//! compiler can build. `quo_runtime.h` is expected to sit alongside whatever
//! build system eventually links the object this produces; this driver does
//! not generate it.

const RUNTIME_HEADER: &str = "quo_runtime.h";

pub fn wrap_module(cpp_members: &str) -> String {
    format!(
        "// Generated by quo-driver. Do not edit by hand.\n#include \"{RUNTIME_HEADER}\"\n\n{cpp_members}\n"
    )
}

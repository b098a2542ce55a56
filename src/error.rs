/// Compilation errors.
///
/// Defines the errors the parser can report while turning a token sequence
/// into a postfix program. They are returned as data inside a
/// [`Compilation`](crate::compiler::parser::Compilation) rather than raised.
pub mod compile_error;

pub use compile_error::CompileError;

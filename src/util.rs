/// Named numeric constants.
///
/// A fixed, read-only table of names (`pi`, `e`) that may stand wherever a
/// number literal is expected. There are no variables; this table cannot be
/// extended at runtime.
pub mod constants;

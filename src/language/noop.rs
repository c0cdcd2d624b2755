/// Takes ownership of `args` and does nothing with it. Several values can be passed as a tuple.
///
/// Useful wherever a callback is required but no work is needed.
///
/// # Examples
/// ```
/// # use mjd_utils::language::noop;
/// noop(());
/// noop((1, "two", 3.0));
///
/// let on_done: fn(u32) = noop;
/// on_done(7);
/// ```
pub fn noop<Args>(_args: Args) {}

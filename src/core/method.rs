//! Pre-bound method calls for iterator adapters.
//!
//! ```
//! use primext::method::call;
//!
//! let words: Vec<String> = ["a", "b"].into_iter().map(call(str::repeat, 3)).collect();
//! assert_eq!(words, ["aaa", "bbb"]);
//! ```

/// Closure that applies `method` to its receiver with `args`.
pub fn call<R, A, O, F>(method: F, args: A) -> impl Fn(&R) -> O
where
    R: ?Sized,
    A: Clone,
    F: Fn(&R, A) -> O,
{
    move |receiver| method(receiver, args.clone())
}

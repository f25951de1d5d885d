use std::time::Instant;

/// Runs `f` and returns its output together with the elapsed wall-clock seconds.
pub fn measure<T, F>(f: F) -> (T, f64)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = f();
    (output, start.elapsed().as_secs_f64())
}

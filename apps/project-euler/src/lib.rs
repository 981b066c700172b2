pub mod error;
pub mod solutions;

use std::fmt::Display;
use std::time::Instant;

use log::debug;

pub use error::EulerError;

/// Available problem IDs
pub const PROBLEMS: &[u32] = &[
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
];

/// Run a specific problem and return the answer
pub fn run_problem(id: u32) -> Result<String, EulerError> {
    let answer = match id {
        1 => solutions::pe1::solve(),
        2 => solutions::pe2::solve(),
        3 => solutions::pe3::solve(),
        4 => solutions::pe4::solve(),
        5 => solutions::pe5::solve(),
        6 => solutions::pe6::solve(),
        7 => solutions::pe7::solve(),
        8 => solutions::pe8::solve(),
        9 => solutions::pe9::solve(),
        10 => solutions::pe10::solve(),
        11 => solutions::pe11::solve(),
        12 => solutions::pe12::solve(),
        13 => solutions::pe13::solve(),
        14 => solutions::pe14::solve(),
        15 => solutions::pe15::solve(),
        16 => solutions::pe16::solve(),
        17 => solutions::pe17::solve(),
        18 => solutions::pe18::solve(),
        19 => solutions::pe19::solve(),
        20 => solutions::pe20::solve(),
        _ => return Err(EulerError::UnknownProblem(id)),
    };
    Ok(answer?)
}

/// Run `compute`, print its answer for problem `id`, and hand the value back.
///
/// The computation itself stays free of output; only the answer line goes
/// to stdout, and the elapsed time is logged at debug level.
pub fn report<T, E, F>(id: u32, compute: F) -> Result<T, E>
where
    T: Display,
    F: FnOnce() -> Result<T, E>,
{
    let started = Instant::now();
    let answer = compute()?;
    debug!("problem {} took {:?}", id, started.elapsed());
    println!("The answer to Problem {} is: {}", id, answer);
    Ok(answer)
}

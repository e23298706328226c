//! PyO3 wrapper for Xoshiro256StarStar

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::checkpoint::RngCheckpoint;
use crate::rng::{State, Xoshiro256StarStar, STATE_SIZE};

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from xoshiro_core_rs import Xoshiro
///
/// rng = Xoshiro(0xDEADBEEF)
/// rng.next()
/// print(rng.int(0, 1000), rng.double())  # 792 0.3319...
/// ```
#[pyclass(name = "Xoshiro")]
pub struct PyXoshiro {
    inner: Xoshiro256StarStar,
}

#[pymethods]
impl PyXoshiro {
    #[new]
    fn new(seed: u64) -> Self {
        PyXoshiro {
            inner: Xoshiro256StarStar::new(seed),
        }
    }

    /// Resume from four raw state words
    ///
    /// Raises ValueError for the wrong length or an all-zero state.
    #[staticmethod]
    fn from_state(words: Vec<u64>) -> PyResult<Self> {
        let state: State = words.try_into().map_err(|w: Vec<u64>| {
            PyValueError::new_err(format!(
                "Expected {} state words, got {}",
                STATE_SIZE,
                w.len()
            ))
        })?;
        let inner = Xoshiro256StarStar::from_state(state)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyXoshiro { inner })
    }

    /// Restore from a checkpoint JSON string
    #[staticmethod]
    fn restore(json: &str) -> PyResult<Self> {
        let inner = RngCheckpoint::from_json(json)
            .and_then(|c| c.restore())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyXoshiro { inner })
    }

    #[pyo3(name = "next")]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn double(&mut self) -> f64 {
        self.inner.next_f64()
    }

    fn int(&mut self, from: i32, to: i32) -> i32 {
        self.inner.next_i32(from, to)
    }

    fn jump(&mut self) {
        self.inner.jump();
    }

    fn long_jump(&mut self) {
        self.inner.long_jump();
    }

    fn state(&self) -> Vec<u64> {
        self.inner.state().to_vec()
    }

    /// Serialize the current state as checkpoint JSON
    #[pyo3(signature = (draws = 0))]
    fn checkpoint(&self, draws: u64) -> PyResult<String> {
        RngCheckpoint::capture(&self.inner, draws)
            .to_json()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

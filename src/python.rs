//! Python bindings
//!
//! A `StartupGame` wraps one [`GameSession`] behind a mutex so the async
//! pacing path can finish on a tokio worker. Content can be replaced
//! process-wide with `init_content`; sessions created afterwards use it.

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use parking_lot::{Mutex, RwLock};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use pyo3::IntoPyObjectExt;
use serde::Serialize;
use serde_json::Value;

use crate::config::{ContentCatalog, GameConfig};
use crate::content::{default_catalog, DEFAULT_CATALOG, INDUSTRIES};
use crate::engine::GameSession;
use crate::error::StartupSimError;
use crate::model::{Founder, Skills};

// ============================================================================
// Cached Content
// ============================================================================

struct CachedContent {
    catalog: Arc<ContentCatalog>,
}

static CACHED_CONTENT: OnceCell<Arc<RwLock<CachedContent>>> = OnceCell::new();

/// Catalog new sessions start from: the initialized one, else the stock one
fn current_catalog() -> Arc<ContentCatalog> {
    CACHED_CONTENT
        .get()
        .map(|cached| Arc::clone(&cached.read().catalog))
        .unwrap_or_else(|| Arc::clone(&DEFAULT_CATALOG))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn json_to_py<'py>(py: Python<'py>, value: &Value) -> PyResult<Bound<'py, PyAny>> {
    match value {
        Value::Null => Ok(py.None().into_bound(py)),
        Value::Bool(b) => b.into_bound_py_any(py),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.into_bound_py_any(py),
            None => n.as_f64().unwrap_or(f64::NAN).into_bound_py_any(py),
        },
        Value::String(s) => s.as_str().into_bound_py_any(py),
        Value::Array(items) => {
            let list = PyList::empty(py);
            for item in items {
                list.append(json_to_py(py, item)?)?;
            }
            Ok(list.into_any())
        }
        Value::Object(map) => {
            let dict = PyDict::new(py);
            for (key, item) in map {
                dict.set_item(key, json_to_py(py, item)?)?;
            }
            Ok(dict.into_any())
        }
    }
}

/// Convert any serializable value into plain Python dicts and lists
fn to_py<T: Serialize + ?Sized>(py: Python<'_>, value: &T) -> PyResult<Py<PyAny>> {
    let json = serde_json::to_value(value).map_err(StartupSimError::from)?;
    Ok(json_to_py(py, &json)?.unbind())
}

// ============================================================================
// Python Functions
// ============================================================================

/// Replace the game content for sessions created from now on
///
/// # Arguments
/// * `json` - Catalog as JSON: {"decisions": [...], "events": [...], "milestones": [...]}.
///   Omit to restore the stock content.
#[pyfunction]
#[pyo3(signature = (json=None))]
fn init_content(json: Option<&str>) -> PyResult<()> {
    let catalog = match json {
        Some(json) => ContentCatalog::from_json(json)?,
        None => default_catalog(),
    };
    let cached = CachedContent {
        catalog: Arc::new(catalog),
    };

    if let Some(existing) = CACHED_CONTENT.get() {
        *existing.write() = cached;
    } else {
        let _ = CACHED_CONTENT.set(Arc::new(RwLock::new(cached)));
    }

    Ok(())
}

#[pyfunction]
fn is_content_initialized() -> bool {
    CACHED_CONTENT.get().is_some()
}

/// Industries a startup can be founded in
#[pyfunction]
fn industries(py: Python<'_>) -> PyResult<Py<PyAny>> {
    to_py(py, &INDUSTRIES[..])
}

// ============================================================================
// StartupGame PyClass
// ============================================================================

/// One game, driven from Python
///
/// Getters return plain dicts with camelCase keys, the same shape as
/// `snapshot_json()`.
#[pyclass]
pub struct StartupGame {
    session: Arc<Mutex<GameSession>>,
}

#[pymethods]
impl StartupGame {
    /// # Arguments
    /// * `config_json` - Optional `GameConfig` as JSON; missing keys keep their defaults
    #[new]
    #[pyo3(signature = (config_json=None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(json)?,
            None => GameConfig::default(),
        };
        Ok(Self {
            session: Arc::new(Mutex::new(GameSession::new(current_catalog(), config))),
        })
    }

    /// Found a startup and start a new game
    ///
    /// # Raises
    /// ValueError if the founder's name is empty or the skills are out of budget
    #[pyo3(signature = (founder_name, startup_name, industry, business=50, technical=50, marketing=50, leadership=50))]
    #[allow(clippy::too_many_arguments)]
    fn start_game(
        &self,
        founder_name: &str,
        startup_name: &str,
        industry: &str,
        business: u32,
        technical: u32,
        marketing: u32,
        leadership: u32,
    ) -> PyResult<()> {
        let mut session = self.session.lock();
        let skills = Skills::new(business, technical, marketing, leadership);
        let founder = Founder::new(founder_name, skills, session.config())?;
        session.start_game(founder, startup_name, industry);
        Ok(())
    }

    /// Resolve a decision and surface the next one; False when nothing matched
    fn make_decision(&self, decision_id: &str, option_id: &str) -> bool {
        self.session
            .lock()
            .make_decision(decision_id, option_id)
            .is_some()
    }

    fn resolve_decision(&self, decision_id: &str, option_id: &str) -> bool {
        self.session
            .lock()
            .resolve_decision(decision_id, option_id)
            .is_some()
    }

    fn load_next_decision(&self) -> Option<String> {
        self.session.lock().load_next_decision()
    }

    /// Resolve now, then surface the next decision after the pacing delay
    ///
    /// # Returns
    /// An awaitable resolving to the id of the newly surfaced decision, or
    /// None when nothing was resolved or nothing is eligible
    fn make_decision_async<'py>(
        &self,
        py: Python<'py>,
        decision_id: String,
        option_id: String,
    ) -> PyResult<Bound<'py, PyAny>> {
        let session = Arc::clone(&self.session);
        let (resolved, delay_ms) = {
            let mut guard = session.lock();
            let resolved = guard.resolve_decision(&decision_id, &option_id).is_some();
            (resolved, guard.config().pacing_delay_ms)
        };

        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            if !resolved {
                return Ok(None);
            }
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            Ok(session.lock().load_next_decision())
        })
    }

    /// Advance one month; returns the month report, or None before start
    fn next_month(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let report = self.session.lock().next_month();
        to_py(py, &report)
    }

    fn dismiss_event(&self, event_id: &str) {
        self.session.lock().dismiss_event(event_id);
    }

    /// Whether the pending (or catalog) decision has an option within budget
    fn can_afford_decision(&self, decision_id: &str) -> bool {
        let session = self.session.lock();
        session
            .current_decisions()
            .iter()
            .find(|d| d.id == decision_id)
            .or_else(|| session.catalog().decision(decision_id))
            .map_or(false, |decision| session.can_afford_decision(decision))
    }

    #[getter]
    fn is_started(&self) -> bool {
        self.session.lock().is_started()
    }

    #[getter]
    fn founder(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        to_py(py, &self.session.lock().founder())
    }

    #[getter]
    fn startup(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        to_py(py, &self.session.lock().startup())
    }

    #[getter]
    fn current_decisions(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        to_py(py, self.session.lock().current_decisions())
    }

    #[getter]
    fn events(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        to_py(py, self.session.lock().events())
    }

    #[getter]
    fn achieved_milestones(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        to_py(py, &self.session.lock().achieved_milestones())
    }

    /// Whole game state plus derived dashboard figures
    fn snapshot(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        to_py(py, &self.session.lock().snapshot())
    }

    fn snapshot_json(&self) -> PyResult<String> {
        Ok(self.session.lock().snapshot().to_json()?)
    }
}

// ============================================================================
// Python Module Definition
// ============================================================================

#[pymodule]
fn startup_sim_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_content, m)?)?;
    m.add_function(wrap_pyfunction!(is_content_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(industries, m)?)?;
    m.add_class::<StartupGame>()?;
    Ok(())
}

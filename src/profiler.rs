//! Profiler de boucle de simulation, volontairement mono-thread : tout
//! l'état vit derrière un `RefCell` puisque le tick est entièrement
//! synchrone (aucun état partagé entre threads).

use log::info;
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Instant;

struct ProfilerInner {
    /// Durées (ms) des blocs labelisés
    samples: HashMap<String, Vec<f32>>,
    /// Métriques scalaires (compteurs de primitives, etc.)
    metrics: HashMap<String, Vec<f32>>,
    /// Durées totales de frame (ms)
    frame_times: Vec<f32>,
    max_samples: usize,
}

impl ProfilerInner {
    fn push_bounded(buffer: &mut Vec<f32>, max: usize, value: f32) {
        if buffer.len() >= max {
            buffer.remove(0);
        }
        buffer.push(value);
    }
}

pub struct Profiler {
    inner: RefCell<ProfilerInner>,
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        Self {
            inner: RefCell::new(ProfilerInner {
                samples: HashMap::new(),
                metrics: HashMap::new(),
                frame_times: Vec::with_capacity(max_samples),
                max_samples,
            }),
        }
    }

    /// Mesure globale d'une frame (RAII)
    pub fn frame(&self) -> FrameGuard<'_> {
        FrameGuard {
            profiler: self,
            start: Instant::now(),
        }
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&self, label: impl Into<String>, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        let dt = start.elapsed().as_secs_f32() * 1000.0;

        let mut inner = self.inner.borrow_mut();
        let max = inner.max_samples;
        let samples = inner.samples.entry(label.into()).or_default();
        ProfilerInner::push_bounded(samples, max, dt);

        result
    }

    /// Enregistre une métrique scalaire
    pub fn record_metric(&self, label: impl Into<String>, value: f32) {
        let mut inner = self.inner.borrow_mut();
        let max = inner.max_samples;
        let buffer = inner.metrics.entry(label.into()).or_default();
        ProfilerInner::push_bounded(buffer, max, value);
    }

    /// FPS moyen sur les frames enregistrées
    pub fn fps(&self) -> f32 {
        let inner = self.inner.borrow();
        if inner.frame_times.is_empty() {
            return 0.0;
        }
        let avg = inner.frame_times.iter().sum::<f32>() / inner.frame_times.len() as f32;
        1000.0 / avg
    }

    pub fn total_frames(&self) -> usize {
        self.inner.borrow().frame_times.len()
    }

    /// Résumé (moyenne, min, max) des temps de blocs
    pub fn summary(&self) -> HashMap<String, (f32, f32, f32)> {
        summarize_map(&self.inner.borrow().samples)
    }

    /// Résumé (moyenne, min, max) des métriques scalaires
    pub fn metrics_summary(&self) -> HashMap<String, (f32, f32, f32)> {
        summarize_map(&self.inner.borrow().metrics)
    }

    /// Log toutes les métriques vers l'info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str, show_fps: bool) {
        if show_fps {
            info!(target: target, "{:.2} FPS", self.fps());
        }
        for (label, (avg, min, max)) in self.summary() {
            info!(
                target: target,
                "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                label, avg, min, max
            );
        }
        for (label, (avg, min, max)) in self.metrics_summary() {
            info!(target: target, "{label}: avg={avg:.1}, min={min:.1}, max={max:.1}");
        }
    }
}

fn summarize_series(series: &[f32]) -> (f32, f32, f32) {
    let avg = series.iter().sum::<f32>() / series.len() as f32;
    let min = series.iter().cloned().fold(f32::MAX, f32::min);
    let max = series.iter().cloned().fold(f32::MIN, f32::max);
    (avg, min, max)
}

fn summarize_map(map: &HashMap<String, Vec<f32>>) -> HashMap<String, (f32, f32, f32)> {
    map.iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.clone(), summarize_series(v)))
        .collect()
}

/// Mesure globale d'une frame
pub struct FrameGuard<'a> {
    profiler: &'a Profiler,
    start: Instant,
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        let dt = self.start.elapsed().as_secs_f32() * 1000.0;
        let mut inner = self.profiler.inner.borrow_mut();
        let max = inner.max_samples;
        ProfilerInner::push_bounded(&mut inner.frame_times, max, dt);
    }
}

/// Macro helper : déduit automatiquement le target via le module appelant
#[macro_export]
macro_rules! log_metrics {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), false);
    };
}

#[macro_export]
macro_rules! log_metrics_and_fps {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), true);
    };
}

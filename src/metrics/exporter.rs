use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use crate::metrics::snapshot::{CounterSnapshot, RunReport};
use crate::metrics::traits::MetricsExporter;

#[derive(Debug)]
struct Sink<W> {
    writer: W,
    error: Option<io::Error>,
}

/// Prometheus text exporter for run reports.
///
/// Writes the Prometheus text exposition format so a finished run can be
/// scraped or pushed to a gateway. [`MetricsExporter::export`] cannot fail;
/// the first write error is kept, later lines are dropped and
/// [`finish`](Self::finish) reports it.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    sink: Mutex<Sink<W>>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            sink: Mutex::new(Sink {
                writer,
                error: None,
            }),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.sink.into_inner() {
            Ok(sink) => sink.writer,
            Err(poisoned) => poisoned.into_inner().writer,
        }
    }

    /// Flushes the writer and returns it, or the first write error.
    pub fn finish(self) -> io::Result<W> {
        let mut sink = match self.sink.into_inner() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(err) = sink.error.take() {
            return Err(err);
        }
        sink.writer.flush()?;
        Ok(sink.writer)
    }

    fn lock(&self) -> MutexGuard<'_, Sink<W>> {
        match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_metric(&self, kind: &str, name: &str, value: impl std::fmt::Display) {
        let mut sink = self.lock();
        if sink.error.is_some() {
            return;
        }
        let written = writeln!(sink.writer, "# TYPE {} {}", name, kind)
            .and_then(|()| writeln!(sink.writer, "{} {}", name, value));
        if let Err(err) = written {
            sink.error = Some(err);
        }
    }

    fn write_counters(&self, counters: &CounterSnapshot) {
        self.write_metric(
            "counter",
            &self.metric_name("comparisons_total"),
            counters.comparisons,
        );
        self.write_metric("counter", &self.metric_name("visits_total"), counters.visits);
        self.write_metric(
            "counter",
            &self.metric_name("cache_hits_total"),
            counters.cache_hits,
        );
        self.write_metric(
            "counter",
            &self.metric_name("cache_misses_total"),
            counters.cache_misses,
        );
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<CounterSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &CounterSnapshot) {
        self.write_counters(snapshot);
    }
}

impl<W: Write + Send> MetricsExporter<RunReport> for PrometheusTextExporter<W> {
    fn export(&self, report: &RunReport) {
        self.write_counters(&report.counters());
        self.write_metric(
            "gauge",
            &self.metric_name("elapsed_milliseconds"),
            format!("{:.3}", report.elapsed_ms),
        );
    }
}

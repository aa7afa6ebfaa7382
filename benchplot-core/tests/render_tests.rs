//! End-to-end rendering tests

use benchplot_core::{
    BenchmarkData, ChartError, ChartKind, ChartRenderer, FailurePolicy, RenderConfig,
    RenderObserver,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Records every observer callback
#[derive(Default)]
struct Recorder {
    started: Vec<ChartKind>,
    rendered: Vec<(ChartKind, PathBuf)>,
    failed: Vec<ChartKind>,
}

impl RenderObserver for Recorder {
    fn chart_started(&mut self, kind: ChartKind) {
        self.started.push(kind);
    }

    fn chart_rendered(&mut self, kind: ChartKind, path: &Path) {
        self.rendered.push((kind, path.to_path_buf()));
    }

    fn chart_failed(&mut self, kind: ChartKind, _error: &ChartError) {
        self.failed.push(kind);
    }
}

/// Renderer writing into a fresh `docs/charts` under a temp dir, at low resolution
fn renderer_in(temp: &TempDir, policy: FailurePolicy) -> (ChartRenderer, PathBuf) {
    let dir = temp.path().join("docs").join("charts");
    let config = RenderConfig::with_output_dir(&dir).dpi(40).policy(policy);
    (ChartRenderer::new(config), dir)
}

fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_renders_all_six_charts() {
    let temp = TempDir::new().unwrap();
    let (renderer, dir) = renderer_in(&temp, FailurePolicy::FailFast);
    let mut recorder = Recorder::default();

    let report = renderer
        .render_all(&BenchmarkData::fastq_pipeline(), &mut recorder)
        .unwrap();

    assert_eq!(report.len(), 6);
    assert_eq!(recorder.started, ChartKind::ALL.to_vec());
    assert_eq!(recorder.rendered.len(), 6);
    assert!(recorder.failed.is_empty());

    let expected: Vec<String> = ChartKind::ALL
        .iter()
        .map(|k| k.file_name().to_string())
        .collect();
    assert_eq!(png_files(&dir), expected);

    for path in report.paths() {
        let size = fs::metadata(path).unwrap().len();
        assert!(size > 0, "{} is empty", path.display());
    }
}

#[test]
fn test_written_files_are_png() {
    let temp = TempDir::new().unwrap();
    let (renderer, _) = renderer_in(&temp, FailurePolicy::FailFast);
    let data = BenchmarkData::fastq_pipeline();
    let metrics = benchplot_core::DerivedMetrics::from_data(&data);

    renderer.prepare_output_dir().unwrap();
    let path = renderer
        .render_chart(ChartKind::Distribution, &data, &metrics)
        .unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_rerun_keeps_file_names() {
    let temp = TempDir::new().unwrap();
    let (renderer, dir) = renderer_in(&temp, FailurePolicy::FailFast);
    let data = BenchmarkData::fastq_pipeline();

    renderer
        .render_all(&data, &mut benchplot_core::NoopObserver)
        .unwrap();
    let first = png_files(&dir);
    renderer
        .render_all(&data, &mut benchplot_core::NoopObserver)
        .unwrap();

    assert_eq!(png_files(&dir), first);
    assert_eq!(first.len(), 6);
}

#[test]
fn test_unusable_output_dir_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let occupied = temp.path().join("charts");
    fs::write(&occupied, b"plain file").unwrap();
    let renderer = ChartRenderer::new(RenderConfig::with_output_dir(&occupied).dpi(40));
    let mut recorder = Recorder::default();

    let result = renderer.render_all(&BenchmarkData::fastq_pipeline(), &mut recorder);

    assert!(matches!(result, Err(ChartError::OutputDir { .. })));
    assert!(recorder.started.is_empty());
    assert!(occupied.is_file());
    let siblings = fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(siblings, 1);
}

#[test]
fn test_fail_fast_stops_at_first_failure() {
    let temp = TempDir::new().unwrap();
    let (renderer, dir) = renderer_in(&temp, FailurePolicy::FailFast);
    // A directory squatting on the third chart's file name makes its write fail
    fs::create_dir_all(dir.join(ChartKind::TimeSaved.file_name())).unwrap();
    let mut recorder = Recorder::default();

    let result = renderer.render_all(&BenchmarkData::fastq_pipeline(), &mut recorder);

    match result {
        Err(ChartError::Render { chart, .. }) => assert_eq!(chart, ChartKind::TimeSaved),
        other => panic!("expected a render error, got {other:?}"),
    }
    assert_eq!(recorder.rendered.len(), 2);
    assert_eq!(recorder.failed, vec![ChartKind::TimeSaved]);
    assert!(!dir.join(ChartKind::Scalability.file_name()).exists());
}

#[test]
fn test_keep_going_attempts_every_chart() {
    let temp = TempDir::new().unwrap();
    let (renderer, dir) = renderer_in(&temp, FailurePolicy::KeepGoing);
    fs::create_dir_all(dir.join(ChartKind::TimeSaved.file_name())).unwrap();
    let mut recorder = Recorder::default();

    let result = renderer.render_all(&BenchmarkData::fastq_pipeline(), &mut recorder);

    assert!(matches!(
        result,
        Err(ChartError::Incomplete {
            failed: 1,
            total: 6
        })
    ));
    assert_eq!(recorder.started.len(), 6);
    assert_eq!(recorder.rendered.len(), 5);
    assert!(dir.join(ChartKind::Distribution.file_name()).is_file());
}

#[test]
fn test_renders_loaded_data() {
    let temp = TempDir::new().unwrap();
    let (renderer, dir) = renderer_in(&temp, FailurePolicy::FailFast);
    let mut data = BenchmarkData::fastq_pipeline();
    // Larger than the fixed axis bounds; the axes must widen
    data.sequential[3] = 400.0;
    data.speedup[3] = 13.3;
    data.datasets[3].total_mb = 2000.0;

    renderer
        .render_all(&data, &mut benchplot_core::NoopObserver)
        .unwrap();
    assert_eq!(png_files(&dir).len(), 6);
}

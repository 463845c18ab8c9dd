use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use mandel::{
    BatchStatus, FrameDescriptor, FrameFormat, FrameJobRunner, FrameNaming, FrameRenderSettings,
    FrameScheduler, InProcessJobRunner, JobOutcome, MandelResult, MovieConfig, ProcessJobRunner,
    SlotPool, ZoomState, ZoomTrajectory, movie_controller,
};

const MANDEL: &str = env!("CARGO_BIN_EXE_mandel");

fn simulated_frames(count: u32) -> Vec<FrameDescriptor> {
    ZoomTrajectory::new(ZoomState::default(), count, FrameNaming::new("sim", "jpg"))
        .unwrap()
        .frames()
        .collect()
}

fn tiny_settings() -> FrameRenderSettings {
    FrameRenderSettings {
        width: 24,
        height: 18,
        max_iterations: 60,
        workers: 3,
        ..FrameRenderSettings::default()
    }
}

#[test]
fn three_slots_never_admit_a_fourth_job() {
    let slots = SlotPool::new(3).unwrap();
    let running = AtomicUsize::new(0);
    let most_running = AtomicUsize::new(0);
    let most_sampled = AtomicUsize::new(0);
    let done = AtomicBool::new(false);

    let runner = |frame: &FrameDescriptor| -> MandelResult<JobOutcome> {
        let now = running.fetch_add(1, Ordering::SeqCst) + 1;
        most_running.fetch_max(now, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(1 + u64::from(frame.frame_index() % 4)));
        running.fetch_sub(1, Ordering::SeqCst);
        Ok(JobOutcome::succeeded(frame, Duration::ZERO))
    };

    let report = thread::scope(|scope| {
        scope.spawn(|| {
            while !done.load(Ordering::SeqCst) {
                most_sampled.fetch_max(slots.active(), Ordering::SeqCst);
                thread::yield_now();
            }
        });

        let report = FrameScheduler::new(&slots, &runner).run(simulated_frames(50));
        done.store(true, Ordering::SeqCst);
        report
    })
    .unwrap();

    assert_eq!(report.succeeded(), 50);
    assert_eq!(report.status(), BatchStatus::AllSucceeded);
    assert!(most_running.load(Ordering::SeqCst) <= 3);
    assert!(most_sampled.load(Ordering::SeqCst) <= 3);
    assert!(report.peak_active() <= 3);
    assert_eq!(slots.active(), 0);
}

#[test]
fn single_slot_runs_frames_one_after_another_in_order() {
    let slots = SlotPool::new(1).unwrap();
    let started = Mutex::new(Vec::new());
    let overlapping = AtomicBool::new(false);
    let running = AtomicUsize::new(0);

    let runner = |frame: &FrameDescriptor| -> MandelResult<JobOutcome> {
        if running.fetch_add(1, Ordering::SeqCst) > 0 {
            overlapping.store(true, Ordering::SeqCst);
        }
        started.lock().unwrap().push(frame.frame_index());
        thread::sleep(Duration::from_millis(1));
        running.fetch_sub(1, Ordering::SeqCst);
        Ok(JobOutcome::succeeded(frame, Duration::ZERO))
    };

    FrameScheduler::new(&slots, &runner)
        .run(simulated_frames(12))
        .unwrap();

    assert!(!overlapping.load(Ordering::SeqCst));
    assert_eq!(started.into_inner().unwrap(), (0..12).collect::<Vec<_>>());
}

#[test]
fn pool_is_reusable_across_batches() {
    let slots = SlotPool::new(2).unwrap();
    let runner = |frame: &FrameDescriptor| -> MandelResult<JobOutcome> {
        Ok(JobOutcome::succeeded(frame, Duration::ZERO))
    };

    for _ in 0..3 {
        let report = FrameScheduler::new(&slots, &runner)
            .run(simulated_frames(7))
            .unwrap();
        assert_eq!(report.succeeded(), 7);
        assert_eq!(slots.active(), 0);
    }
}

#[test]
fn subprocess_and_in_process_frames_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let trajectory = |sub: &str| {
        ZoomTrajectory::new(ZoomState::default(), 4, FrameNaming::new(dir.path().join(sub), "ppm"))
            .unwrap()
    };
    let slots = SlotPool::new(2).unwrap();

    let external = trajectory("external");
    std::fs::create_dir_all(external.naming().directory()).unwrap();
    let report = FrameScheduler::new(&slots, ProcessJobRunner::new(MANDEL, tiny_settings()))
        .run(external.frames())
        .unwrap();
    assert_eq!(report.status(), BatchStatus::AllSucceeded);

    let internal = trajectory("internal");
    let report = FrameScheduler::new(&slots, InProcessJobRunner::new(tiny_settings()))
        .run(internal.frames())
        .unwrap();
    assert_eq!(report.status(), BatchStatus::AllSucceeded);

    for (a, b) in external.frames().zip(internal.frames()) {
        assert_eq!(
            std::fs::read(a.output()).unwrap(),
            std::fs::read(b.output()).unwrap(),
            "frame {} differs",
            a.frame_index()
        );
    }
}

#[test]
fn failing_frames_are_reported_without_stopping_the_batch() {
    struct EveryThirdFails;

    impl FrameJobRunner for EveryThirdFails {
        fn run(&self, frame: &FrameDescriptor) -> MandelResult<JobOutcome> {
            if frame.frame_index() % 3 == 0 {
                Ok(JobOutcome::failed(frame, "renderer exited with exit status: 1", Duration::ZERO))
            } else {
                Ok(JobOutcome::succeeded(frame, Duration::ZERO))
            }
        }
    }

    let slots = SlotPool::new(4).unwrap();
    let report = FrameScheduler::new(&slots, EveryThirdFails)
        .run(simulated_frames(10))
        .unwrap();

    assert_eq!(report.outcomes().len(), 10);
    assert_eq!(report.failed(), 4);
    assert_eq!(report.status(), BatchStatus::PartialFailure);
    let failed: Vec<u32> = report.failures().map(|o| o.frame_index).collect();
    assert_eq!(failed, vec![0, 3, 6, 9]);
}

#[test]
fn movie_controller_names_frames_with_two_digits() {
    let dir = tempfile::tempdir().unwrap();
    let config = MovieConfig {
        processes: 4,
        frames: 12,
        out_dir: dir.path().to_path_buf(),
        format: FrameFormat::Png,
        render: tiny_settings(),
        renderer: Some(PathBuf::from(MANDEL)),
        ..MovieConfig::default()
    };

    let report = movie_controller(&config).unwrap();

    assert_eq!(report.status(), BatchStatus::AllSucceeded);
    assert!(dir.path().join("mandel00.png").is_file());
    assert!(dir.path().join("mandel11.png").is_file());
}

use super::*;

#[derive(Default)]
struct Recorder {
    shown: Vec<String>,
    alerts: Vec<String>,
}

impl TimerDisplay for Vec<String> {
    fn show(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl AlertSink for Vec<String> {
    fn alert(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl Recorder {
    fn start(&mut self, timer: &mut QuizTimer) -> TickOutcome {
        timer.start(&mut self.shown, &mut self.alerts)
    }

    fn tick(&mut self, timer: &mut QuizTimer) -> TickOutcome {
        timer.tick(&mut self.shown, &mut self.alerts)
    }
}

#[test]
fn formats_minutes_and_padded_seconds() {
    assert_eq!(format_remaining(600), "10:00");
    assert_eq!(format_remaining(599), "9:59");
    assert_eq!(format_remaining(65), "1:05");
    assert_eq!(format_remaining(9), "0:09");
    assert_eq!(format_remaining(0), "0:00");
}

#[test]
fn start_shows_initial_value() {
    let mut recorder = Recorder::default();
    let mut timer = QuizTimer::default();

    assert_eq!(recorder.start(&mut timer), TickOutcome::Running);
    assert_eq!(recorder.shown, vec!["10:00".to_string()]);
}

#[test]
fn reaches_zero_after_600_ticks_and_alerts_once() {
    let mut recorder = Recorder::default();
    let mut timer = QuizTimer::default();
    recorder.start(&mut timer);

    for _ in 0..599 {
        assert_eq!(recorder.tick(&mut timer), TickOutcome::Running);
    }
    assert!(recorder.alerts.is_empty());
    assert_eq!(recorder.tick(&mut timer), TickOutcome::Expired);

    assert_eq!(recorder.shown.last().map(String::as_str), Some("0:00"));
    assert_eq!(recorder.alerts, vec![TIME_UP_MESSAGE.to_string()]);
    assert!(timer.is_halted());
}

#[test]
fn ticks_after_expiry_are_ignored() {
    let mut recorder = Recorder::default();
    let mut timer = QuizTimer::new(1);
    recorder.start(&mut timer);
    recorder.tick(&mut timer);
    let shown = recorder.shown.len();

    assert_eq!(recorder.tick(&mut timer), TickOutcome::Halted);
    assert_eq!(recorder.tick(&mut timer), TickOutcome::Halted);

    assert_eq!(recorder.shown.len(), shown);
    assert_eq!(recorder.alerts.len(), 1);
    assert_eq!(timer.remaining(), 0);
}

#[test]
fn zero_start_expires_immediately() {
    let mut recorder = Recorder::default();
    let mut timer = QuizTimer::new(0);

    assert_eq!(recorder.start(&mut timer), TickOutcome::Expired);
    assert_eq!(recorder.shown, vec!["0:00".to_string()]);
    assert_eq!(recorder.alerts.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn driver_ticks_once_per_second() {
    let mut timer = QuizTimer::new(3);
    let mut shown: Vec<String> = Vec::new();
    let mut alerts: Vec<String> = Vec::new();
    let started = tokio::time::Instant::now();

    run_quiz_timer(&mut timer, &mut shown, &mut alerts).await;

    assert_eq!(started.elapsed(), Duration::from_secs(3));
    assert_eq!(shown, vec!["0:03", "0:02", "0:01", "0:00"]);
    assert_eq!(alerts, vec![TIME_UP_MESSAGE.to_string()]);
}

// Example: drive the headless pieces by hand, without any viewport abstraction.
use pagesnap::{
    DirectionDetector, EasingPreset, ScrollAnimation, ScrollSample, SectionRect, SectionTracker,
};

fn main() {
    let sections = [
        SectionRect::new(0.0, 800.0),
        SectionRect::new(800.0, 800.0),
        SectionRect::new(1600.0, 800.0),
    ];
    let mut tracker = SectionTracker::new(sections.len());
    let mut detector = DirectionDetector::new(0.0);

    // A wheel tick moves the page by 50px.
    let sample = ScrollSample::new(50.0, 800.0);
    let direction = detector.sample(sample.offset);
    let current = sections[tracker.current_index()];
    let Some(target) = tracker.next_target(sample, current, direction) else {
        println!("no snap");
        return;
    };

    tracker.set_current(target);
    let to = SectionTracker::destination(direction, sections[target], sample);
    detector.record(to);
    println!("direction={direction:?} target={target} destination={to}");

    let easing = EasingPreset::InOutQuintic.function();
    let anim = ScrollAnimation::new(sample.offset, to, 0.0, 480.0, easing);
    let mut now_ms = 0.0;
    loop {
        now_ms += 16.0;
        let off = anim.sample(now_ms);
        if (now_ms as u64) % 96 == 0 {
            println!("t={now_ms} off={off:.1}");
        }
        if anim.is_done(now_ms) {
            println!("done: raw={off:.3} residual={:.3}", anim.residual(off));
            break;
        }
    }
}

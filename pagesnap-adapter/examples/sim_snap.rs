use pagesnap_adapter::{
    EasingPreset, SectionRect, SimViewport, SnapController, SnapOptions, drive_frames,
};

fn main() {
    // Example: a headless host that owns a fake-clock viewport.
    //
    // A real adapter would:
    // - call on_scroll() from its scroll listener once the viewport asks for one
    // - call on_frame(timestamp) from requestAnimationFrame (or its frame timer)
    // - map set_input_suppressed / set_scrollbar_hidden onto its input and styling layers
    let sections = vec![
        SectionRect::new(0.0, 900.0),
        SectionRect::new(900.0, 900.0),
        SectionRect::new(1800.0, 900.0),
    ];
    let options = SnapOptions::new(sections)
        .with_hide_scrollbar(true)
        .with_snap_duration_ms(600.0)
        .with_easing(EasingPreset::EaseInOutQuad)
        .with_before_snap(Some(|i: usize, s: &SectionRect| {
            println!("leaving section {i} (top={})", s.top);
        }))
        .with_after_snap(Some(|i: usize, s: &SectionRect| {
            println!("arrived at section {i} (top={})", s.top);
        }));

    let viewport = SimViewport::new(900.0).with_round_offsets(true);
    let mut c = match SnapController::new(viewport, options) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };

    if let Err(err) = c.register() {
        eprintln!("{err}");
        return;
    }
    let frames = drive_frames(&mut c, 16.0);
    println!("initial snap took {frames} frames");

    // The user nudges the wheel down twice, then back up once.
    for offset in [40.0, 940.0, 1780.0] {
        c.viewport_mut().user_scroll_to(offset);
        if let Some(done) = c.on_scroll() {
            let frames = drive_frames(&mut c, 16.0);
            println!(
                "{:?} after {frames} frames: offset={} direction={:?}",
                done.outcome(),
                c.viewport().offset,
                c.scroll_direction()
            );
        }
    }

    // Form inputs arrive as strings.
    match "inOutQuintic".parse::<EasingPreset>() {
        Ok(preset) => c.set_easing(preset),
        Err(err) => eprintln!("{err}"),
    }
    if let Err(err) = c.set_snap_duration(0.0) {
        println!("rejected: {err}");
    }

    println!("state={:?}", c.state());
    if let Err(err) = c.unregister() {
        eprintln!("{err}");
    }
}

use super::{Category, Difficulty, ProtocolDefinition, definition};
use crate::{
    foundation::core::Rgba8,
    scene::{
        dsl::SceneBuilder,
        model::{Actor, BoxSize, Caption, Endpoint, Link, Marker, Placement, Slots, StepSpan},
    },
};

/// Horizontal lane for outgoing data frames.
const DATA_LANE: f64 = -0.1;
/// Horizontal lane for acknowledgments.
const ACK_LANE: f64 = 0.1;

pub(super) fn definitions() -> Vec<ProtocolDefinition> {
    vec![stop_and_wait(), go_back_n(), selective_repeat()]
}

fn sender_receiver(size: BoxSize) -> SceneBuilder {
    SceneBuilder::new()
        .actor(
            Actor::new("sender", "SENDER", Placement::Left)
                .subtitle("Ready")
                .size(size),
        )
        .actor(
            Actor::new("receiver", "RECEIVER", Placement::Right)
                .subtitle("Listening")
                .colors(Rgba8::GREEN, Rgba8::INK)
                .size(size),
        )
        .link(Link::new("sender", "receiver").color(Rgba8::CYAN))
}

fn data(label: &str) -> Marker {
    Marker::between(Endpoint::edge("sender"), Endpoint::edge("receiver"), label).lane(DATA_LANE)
}

fn ack(label: &str) -> Marker {
    Marker::between(Endpoint::edge("sender"), Endpoint::edge("receiver"), label)
        .returning()
        .lane(ACK_LANE)
        .colors(Rgba8::GREEN, Rgba8::INK)
}

fn frame_circle(n: usize) -> Marker {
    Marker::between(Endpoint::edge("sender"), Endpoint::edge("receiver"), n.to_string())
        .lane(-0.05)
        .circle(15.0)
        .tooltip(format!("Frame {n} | Seq: {n} | Type: DATA"))
}

pub(super) fn stop_and_wait() -> ProtocolDefinition {
    let frame = |n: u32| {
        data(&format!("Frame {n}"))
            .subtitle(format!("Seq: {n}"))
            .tooltip(format!(
                "Frame {n} | Seq: {n} | Size: 1024 bytes | Type: DATA"
            ))
    };
    let ack0 = || {
        ack("ACK 0")
            .subtitle("Ack: 1")
            .tooltip("ACK 0 | Ack#: 1 | Type: ACKNOWLEDGMENT | Window: 1")
    };

    let scene = sender_receiver(BoxSize::default())
        .marker(StepSpan::at(0), frame(0).at(0.1))
        .marker(StepSpan::at(1), frame(0).at(0.5))
        .caption(
            StepSpan::at(1),
            Caption::new("Timeout timer running...", 0.5, 0.15).color(Rgba8::AMBER),
        )
        .badge(StepSpan::at(2), "receiver", "Processing Frame 0", Rgba8::GREEN)
        .marker(StepSpan::at(3), ack0().at(0.15))
        .marker(StepSpan::at(4), ack0().at(0.9))
        .marker(StepSpan::at(4), frame(1).at(0.1))
        .badge(StepSpan::at(4), "sender", "ACK 0 received", Rgba8::GREEN)
        .build();

    definition(
        "stop-and-wait",
        "Stop-and-Wait ARQ",
        "A simple flow control protocol where the sender transmits one frame and waits for an acknowledgment before sending the next frame.",
        Category::DataLink,
        Difficulty::Beginner,
        &[
            ("Send Frame", "Sender transmits Frame 0 to receiver"),
            ("Wait for ACK", "Sender waits and starts timeout timer"),
            ("Receive & Process", "Receiver processes the frame"),
            ("Send ACK", "Receiver sends acknowledgment back"),
            ("Next Frame", "Sender receives ACK and sends next frame"),
        ],
        scene,
    )
}

pub(super) fn go_back_n() -> ProtocolDefinition {
    // Sliding window of 4 over 6 sequence numbers.
    const WINDOWS: [&[usize]; 6] = [
        &[0, 1, 2, 3],
        &[0, 1, 2, 3],
        &[1, 2, 3, 4],
        &[1, 2, 3, 4],
        &[2, 3, 4, 5],
        &[2, 3, 4, 5],
    ];

    let retransmit = |n: usize| {
        frame_circle(n)
            .colors(Rgba8::VIOLET, Rgba8::WHITE)
            .tooltip(format!("Frame {n} | Seq: {n} | Type: RETRANSMIT"))
    };

    let scene = sender_receiver(BoxSize::large())
        .caption(
            StepSpan::always(),
            Caption::new("Sender Window (N = 4)", 0.225, 0.09)
                .color(Rgba8::GRAY)
                .size(10.0),
        )
        .each_step(0..6, |b, step| {
            b.slots(
                StepSpan::at(step),
                Slots::row(0.225, 0.125, 6, 50.0, 60.0, Rgba8::CYAN)
                    .filled(WINDOWS[step].iter().copied())
                    .ghost_labels(),
            )
        })
        // Step 1: the whole window in flight.
        .marker(StepSpan::at(0), frame_circle(0).at(0.8))
        .marker(StepSpan::at(0), frame_circle(1).at(0.6))
        .marker(StepSpan::at(0), frame_circle(2).at(0.4))
        .marker(StepSpan::at(0), frame_circle(3).at(0.2))
        // Step 2: ACK 0 on its way back.
        .marker(
            StepSpan::at(1),
            ack("A0")
                .subtitle("ACK 0")
                .circle(15.0)
                .at(0.3)
                .tooltip("ACK 0 | Ack#: 1 | Type: ACKNOWLEDGMENT"),
        )
        .marker(StepSpan::at(1), frame_circle(1).at(0.9))
        .marker(StepSpan::at(1), frame_circle(2).at(0.7))
        .marker(StepSpan::at(1), frame_circle(3).at(0.5))
        // Step 3: window slides, frame 4 leaves.
        .marker(StepSpan::at(2), frame_circle(2).at(0.85))
        .marker(StepSpan::at(2), frame_circle(3).at(0.65))
        .marker(StepSpan::at(2), frame_circle(4).at(0.2).subtitle("New"))
        .caption(
            StepSpan::at(2),
            Caption::new("Window slides to [1..4]", 0.5, 0.85).color(Rgba8::CYAN),
        )
        // Step 4: frame 2 is lost.
        .marker(StepSpan::at(3), frame_circle(2).at(0.5).colors(Rgba8::RED, Rgba8::WHITE).lost())
        .marker(StepSpan::at(3), frame_circle(3).at(0.8))
        .marker(StepSpan::at(3), frame_circle(4).at(0.6))
        .caption(
            StepSpan::at(3),
            Caption::new("Frame 2 Lost!", 0.5, 0.82)
                .color(Rgba8::RED)
                .size(20.0)
                .bold(),
        )
        // Step 5: timeout, go back to 2.
        .caption(
            StepSpan::at(4),
            Caption::new("Timeout! Going back to Frame 2", 0.5, 0.82)
                .color(Rgba8::AMBER)
                .bold(),
        )
        .marker(StepSpan::at(4), retransmit(2).at(0.3).subtitle("Retransmit"))
        .marker(StepSpan::at(4), retransmit(3).at(0.2))
        .marker(StepSpan::at(4), retransmit(4).at(0.1))
        // Step 6: back in order.
        .marker(StepSpan::at(5), retransmit(2).at(0.9))
        .marker(StepSpan::at(5), retransmit(3).at(0.7))
        .marker(StepSpan::at(5), retransmit(4).at(0.5))
        .marker(StepSpan::at(5), frame_circle(5).at(0.2))
        .check(
            StepSpan::at(5),
            Caption::new("Frames 2-4 retransmitted in order", 0.5, 0.82),
        )
        .build();

    definition(
        "go-back-n",
        "Go-Back-N ARQ",
        "Sliding window protocol where sender can transmit multiple frames before waiting for acknowledgment, but retransmits all frames after a lost one.",
        Category::DataLink,
        Difficulty::Intermediate,
        &[
            ("Send Window", "Sender transmits frames 0-3 in window"),
            ("ACK Received", "Receiver acknowledges Frame 0"),
            ("Slide Window", "Window slides, Frame 4 sent"),
            ("Frame Lost", "Frame 2 is lost during transmission"),
            ("Go Back", "Timeout occurs, retransmit from Frame 2"),
            ("Resume", "Continue transmission after retransmit"),
        ],
        scene,
    )
}

pub(super) fn selective_repeat() -> ProtocolDefinition {
    // Receiver buffer contents after each step.
    const BUFFER: [&[usize]; 6] = [
        &[0],
        &[0, 1],
        &[0, 1],
        &[0, 1, 3],
        &[0, 1, 3],
        &[0, 1, 2, 3],
    ];

    let scene = sender_receiver(BoxSize::default())
        .caption(
            StepSpan::always(),
            Caption::new("Receiver Buffer", 0.7, 0.08)
                .color(Rgba8::GRAY)
                .size(10.0),
        )
        .each_step(0..6, |b, step| {
            b.slots(
                StepSpan::at(step),
                Slots::column(0.68, 0.12, 4, 36.0, 50.0, Rgba8::GREEN)
                    .filled(BUFFER[step].iter().copied())
                    .ghost_labels(),
            )
        })
        .marker(StepSpan::at(0), frame_circle(0).at(0.6))
        .marker(StepSpan::at(1), frame_circle(1).at(0.6))
        .marker(
            StepSpan::at(2),
            frame_circle(2)
                .at(0.5)
                .colors(Rgba8::RED, Rgba8::WHITE)
                .lost(),
        )
        .caption(
            StepSpan::at(2),
            Caption::new("Frame 2 lost in transit", 0.4, 0.82)
                .color(Rgba8::RED)
                .bold(),
        )
        .marker(StepSpan::at(3), frame_circle(3).at(0.6))
        .caption(
            StepSpan::at(3),
            Caption::new("Frame 3 buffered out of order", 0.4, 0.82).color(Rgba8::GREEN),
        )
        .marker(
            StepSpan::at(4),
            ack("N2")
                .circle(15.0)
                .at(0.3)
                .subtitle("NAK 2")
                .colors(Rgba8::AMBER, Rgba8::INK)
                .tooltip("NAK 2 | Missing: Frame 2 | Type: NEGATIVE ACK"),
        )
        .marker(
            StepSpan::at(5),
            frame_circle(2)
                .at(0.7)
                .subtitle("Retransmit")
                .colors(Rgba8::VIOLET, Rgba8::WHITE)
                .tooltip("Frame 2 | Seq: 2 | Type: RETRANSMIT"),
        )
        .check(
            StepSpan::at(5),
            Caption::new("Only Frame 2 retransmitted", 0.4, 0.82),
        )
        .build();

    definition(
        "selective-repeat",
        "Selective Repeat ARQ",
        "Advanced sliding window protocol that retransmits only the lost or corrupted frames, not all subsequent frames.",
        Category::DataLink,
        Difficulty::Advanced,
        &[
            ("Send Frame 0", "First frame transmitted"),
            ("Send Frame 1", "Second frame transmitted"),
            ("Frame 2 Lost", "Third frame is lost in transit"),
            ("Send Frame 3", "Fourth frame transmitted successfully"),
            ("NAK/Timeout", "Receiver detects missing Frame 2"),
            ("Selective Retransmit", "Only Frame 2 is retransmitted"),
        ],
        scene,
    )
}

use super::{Category, Difficulty, ProtocolDefinition, definition};
use crate::{
    foundation::core::Rgba8,
    scene::{
        dsl::SceneBuilder,
        model::{Actor, Caption, Endpoint, Link, Marker, Placement, StepSpan},
    },
};

pub(super) fn definitions() -> Vec<ProtocolDefinition> {
    vec![tcp_handshake(), udp()]
}

pub(super) fn tcp_handshake() -> ProtocolDefinition {
    let to_server = |label: &str| {
        Marker::between(Endpoint::edge("client"), Endpoint::edge("server"), label)
    };

    let scene = SceneBuilder::new()
        .actor(Actor::new("client", "CLIENT", Placement::Left).subtitle("192.168.1.100"))
        .actor(
            Actor::new("server", "SERVER", Placement::Right)
                .subtitle("203.0.113.42:80")
                .colors(Rgba8::VIOLET, Rgba8::WHITE),
        )
        .link(Link::new("client", "server").dashed())
        .marker(
            StepSpan::at(0),
            to_server("SYN")
                .lane(-0.13)
                .subtitle("Seq: 1000")
                .tooltip("SYN | Seq: 1000 | Flags: SYN | Window: 65535 | Port: 443"),
        )
        .marker(
            StepSpan::at(1),
            to_server("SYN-ACK")
                .returning()
                .subtitle("Seq: 2000")
                .colors(Rgba8::VIOLET, Rgba8::WHITE)
                .tooltip("SYN-ACK | Seq: 2000 | Ack: 1001 | Flags: SYN+ACK | Window: 32768"),
        )
        .marker(
            StepSpan::at(2),
            to_server("ACK")
                .lane(0.13)
                .subtitle("Ack: 2001")
                .colors(Rgba8::GREEN, Rgba8::INK)
                .tooltip("ACK | Ack: 2001 | Flags: ACK | Window: 65535 | State: ESTABLISHED"),
        )
        .check(
            StepSpan::at(3),
            Caption::new("CONNECTION ESTABLISHED", 0.5, 0.85).size(16.0),
        )
        .badge(StepSpan::at(3), "client", "ESTABLISHED", Rgba8::GREEN)
        .badge(StepSpan::at(3), "server", "ESTABLISHED", Rgba8::GREEN)
        .build();

    definition(
        "tcp-handshake",
        "TCP 3-Way Handshake",
        "Connection establishment protocol that ensures both client and server are ready to exchange data.",
        Category::Transport,
        Difficulty::Intermediate,
        &[
            ("SYN", "Client sends SYN packet with initial sequence number"),
            ("SYN-ACK", "Server responds with SYN-ACK, acknowledging client's SYN"),
            ("ACK", "Client sends ACK to acknowledge server's SYN"),
            ("Connected", "Connection established, ready for data transfer"),
        ],
        scene,
    )
}

pub(super) fn udp() -> ProtocolDefinition {
    // Packet n rides its own lane; lanes sit at 30%, 50%, 70% and 90% of the height.
    let datagram = |n: usize| {
        let lane = [-0.2, 0.0, 0.2, 0.4][n - 1];
        Marker::between(
            Endpoint::edge("client"),
            Endpoint::edge("server"),
            format!("Packet {n}"),
        )
        .lane(lane)
        .subtitle("Datagram")
        .colors(Rgba8::MAGENTA, Rgba8::WHITE)
        .tooltip(format!(
            "UDP Datagram {n} | Src Port: 5000 | Dst Port: 53 | Length: 512 | Checksum: 0x1c46"
        ))
    };

    let scene = SceneBuilder::new()
        .actor(Actor::new("client", "CLIENT", Placement::Left).subtitle("Port 5000"))
        .actor(
            Actor::new("server", "SERVER", Placement::Right)
                .subtitle("Port 53")
                .colors(Rgba8::MAGENTA, Rgba8::WHITE),
        )
        .link(Link::new("client", "server").color(Rgba8::MAGENTA).dashed())
        .caption(
            StepSpan::always(),
            Caption::new("Connectionless", 0.5, 0.08)
                .color(Rgba8::GRAY)
                .size(14.0)
                .bold(),
        )
        .marker(StepSpan::at(0), datagram(1).at(0.3))
        .marker(StepSpan::at(1), datagram(1).at(0.7))
        .marker(StepSpan::at(1), datagram(2).at(0.3))
        .marker(StepSpan::at(2), datagram(1).at(0.95))
        .marker(StepSpan::at(2), datagram(2).at(0.7))
        .marker(StepSpan::at(2), datagram(3).at(0.3))
        .marker(StepSpan::at(3), datagram(2).at(0.95))
        .marker(StepSpan::at(3), datagram(3).at(0.7))
        .marker(StepSpan::at(3), datagram(4).at(0.3))
        .caption(
            StepSpan::at(3),
            Caption::new("No ACK - Fire and Forget", 0.5, 0.18)
                .color(Rgba8::AMBER)
                .size(16.0)
                .bold(),
        )
        .build();

    definition(
        "udp",
        "UDP",
        "User Datagram Protocol - a connectionless protocol for fast data transmission without delivery guarantees or ordering.",
        Category::Transport,
        Difficulty::Beginner,
        &[
            ("Send Packet 1", "Client sends first datagram"),
            ("Send Packet 2", "Second datagram sent immediately"),
            ("Send Packet 3", "Third datagram sent without waiting"),
            ("No ACK", "No acknowledgment required - fire and forget"),
        ],
        scene,
    )
}

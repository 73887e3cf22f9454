use super::{Category, Difficulty, ProtocolDefinition, definition};
use crate::{
    foundation::core::Rgba8,
    scene::{
        dsl::SceneBuilder,
        model::{Actor, BoxSize, Caption, Endpoint, Link, Marker, Placement, StepSpan},
    },
};

pub(super) fn definitions() -> Vec<ProtocolDefinition> {
    vec![arp(), icmp()]
}

pub(super) fn arp() -> ProtocolDefinition {
    const WHO_HAS: &str = "Who has 192.168.1.20? Tell 192.168.1.10";
    const IS_AT: &str = "192.168.1.20 is at AA:BB:CC:DD:EE:FF";

    let request = |to: Endpoint| {
        Marker::between(Endpoint::edge("host_a"), to, "ARP Request")
            .subtitle("Broadcast")
            .colors(Rgba8::AMBER, Rgba8::INK)
            .tooltip(format!("{WHO_HAS} | Dst MAC: FF:FF:FF:FF:FF:FF"))
    };
    let reply = || {
        Marker::between(Endpoint::edge("host_b"), Endpoint::edge("host_a"), "ARP Reply")
            .subtitle("Unicast")
            .lane(0.08)
            .colors(Rgba8::GREEN, Rgba8::INK)
            .tooltip(IS_AT)
    };

    let scene = SceneBuilder::new()
        .actor(Actor::new("host_a", "HOST A", Placement::Left).subtitle("192.168.1.10"))
        .actor(
            Actor::new("host_b", "HOST B", Placement::Right)
                .subtitle("192.168.1.20")
                .colors(Rgba8::GREEN, Rgba8::INK),
        )
        .actor(
            Actor::new("host_c", "HOST C", Placement::At { x: 0.5, y: 0.85 })
                .subtitle("192.168.1.30")
                .colors(Rgba8::GRAY, Rgba8::INK)
                .size(BoxSize::compact()),
        )
        .link(Link::new("host_a", "host_b").dashed())
        .caption(
            StepSpan::range(0, 2),
            Caption::new(WHO_HAS, 0.5, 0.12).color(Rgba8::AMBER),
        )
        .marker(StepSpan::at(0), request(Endpoint::edge("host_b")).at(0.2))
        .marker(StepSpan::at(1), request(Endpoint::edge("host_b")).at(0.6))
        .marker(StepSpan::at(1), request(Endpoint::center("host_c")).at(0.6))
        .badge(StepSpan::at(1), "host_c", "Not me - ignored", Rgba8::GRAY)
        .caption(
            StepSpan::range(2, 4),
            Caption::new(IS_AT, 0.5, 0.12).color(Rgba8::GREEN),
        )
        .marker(StepSpan::at(2), reply().at(0.3))
        .marker(StepSpan::at(3), reply().at(0.9))
        .badge(StepSpan::from(3), "host_a", "AA:BB:CC:DD:EE:FF", Rgba8::GREEN)
        .check(StepSpan::at(4), Caption::new("ARP Cache Updated", 0.5, 0.12).size(16.0))
        .build();

    definition(
        "arp",
        "ARP",
        "Address Resolution Protocol maps IP addresses to MAC addresses on local networks.",
        Category::Network,
        Difficulty::Beginner,
        &[
            ("ARP Request", "Host broadcasts 'Who has this IP?'"),
            ("Broadcast", "Request sent to all devices on network"),
            ("ARP Reply", "Target host responds with MAC address"),
            ("MAC Address", "Requester receives MAC address"),
            ("Cache Update", "ARP cache updated with IP-MAC mapping"),
        ],
        scene,
    )
}

pub(super) fn icmp() -> ProtocolDefinition {
    let echo = || {
        Marker::between(Endpoint::edge("source"), Endpoint::edge("dest"), "Echo Request")
            .subtitle("Type 8")
            .lane(-0.08)
            .tooltip("ICMP Echo Request | Type: 8 | Code: 0 | Seq: 1 | TTL: 64")
    };
    let reply = || {
        Marker::between(Endpoint::edge("dest"), Endpoint::edge("source"), "Echo Reply")
            .subtitle("Type 0")
            .lane(0.08)
            .colors(Rgba8::GREEN, Rgba8::INK)
            .tooltip("ICMP Echo Reply | Type: 0 | Code: 0 | Seq: 1 | TTL: 56")
    };

    let scene = SceneBuilder::new()
        .actor(Actor::new("source", "SOURCE", Placement::Left).subtitle("10.0.0.1"))
        .actor(
            Actor::new("dest", "DESTINATION", Placement::Right)
                .subtitle("10.0.0.100")
                .colors(Rgba8::GREEN, Rgba8::INK),
        )
        .link(Link::new("source", "dest").color(Rgba8::CYAN).dashed())
        .marker(StepSpan::at(0), echo().at(0.3))
        .marker(StepSpan::at(1), echo().at(0.7))
        .marker(StepSpan::at(2), reply().at(0.3))
        .marker(StepSpan::at(3), reply().at(0.7))
        .check(StepSpan::at(4), Caption::new("Host is Reachable", 0.5, 0.85).size(16.0))
        .caption(
            StepSpan::at(4),
            Caption::new("RTT: 12ms", 0.5, 0.2)
                .color(Rgba8::AMBER)
                .size(18.0)
                .bold(),
        )
        .build();

    definition(
        "icmp",
        "ICMP (Ping)",
        "Internet Control Message Protocol used for network diagnostics and error reporting.",
        Category::Network,
        Difficulty::Beginner,
        &[
            ("Echo Request", "Source sends ICMP Echo Request (ping)"),
            ("Packet Travel", "Request travels to destination"),
            ("Echo Reply", "Destination sends Echo Reply back"),
            ("Reply Travel", "Reply returns to source"),
            ("RTT Calculated", "Round-trip time measured and displayed"),
        ],
        scene,
    )
}

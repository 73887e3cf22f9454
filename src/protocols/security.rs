use super::{Category, Difficulty, ProtocolDefinition, definition};
use crate::{
    foundation::core::Rgba8,
    scene::{
        dsl::SceneBuilder,
        model::{Actor, Caption, Endpoint, Link, Marker, Placement, StepSpan},
    },
};

pub(super) fn definitions() -> Vec<ProtocolDefinition> {
    vec![tls()]
}

pub(super) fn tls() -> ProtocolDefinition {
    let scene = SceneBuilder::new()
        .actor(Actor::new("client", "CLIENT", Placement::Left).subtitle("Browser"))
        .actor(
            Actor::new("server", "SERVER", Placement::Right)
                .subtitle("example.com:443")
                .colors(Rgba8::VIOLET, Rgba8::WHITE),
        )
        .link(Link::new("client", "server").dashed())
        .marker(
            StepSpan::at(0),
            Marker::between(Endpoint::edge("client"), Endpoint::edge("server"), "Client Hello")
                .lane(-0.1)
                .subtitle("Cipher Suites, Random")
                .tooltip("TLS 1.3 | Cipher Suites: TLS_AES_128_GCM_SHA256 | Random: 32 bytes"),
        )
        .marker(
            StepSpan::at(1),
            Marker::between(Endpoint::edge("server"), Endpoint::edge("client"), "Server Hello")
                .subtitle("+ CERT")
                .colors(Rgba8::VIOLET, Rgba8::WHITE)
                .tooltip("Cipher: TLS_AES_128_GCM_SHA256 | Certificate: CN=example.com"),
        )
        .marker(
            StepSpan::at(2),
            Marker::between(Endpoint::edge("client"), Endpoint::edge("server"), "Key Exchange")
                .lane(0.1)
                .subtitle("Pre-Master Secret (Encrypted)")
                .colors(Rgba8::AMBER, Rgba8::INK)
                .tooltip("Pre-master secret | Encrypted with server public key"),
        )
        .caption(
            StepSpan::at(3),
            Caption::new("Generating Session Keys...", 0.5, 0.2)
                .color(Rgba8::AMBER)
                .bold(),
        )
        .badge(StepSpan::from(3), "client", "Session Key", Rgba8::AMBER)
        .badge(StepSpan::from(3), "server", "Session Key", Rgba8::AMBER)
        .marker(
            StepSpan::at(4),
            Marker::between(Endpoint::edge("client"), Endpoint::edge("server"), "Encrypted")
                .subtitle("AES-128-GCM")
                .colors(Rgba8::GREEN, Rgba8::INK)
                .tooltip("Application data | Encrypted with session key"),
        )
        .check(StepSpan::at(4), Caption::new("Secure Connection", 0.5, 0.85).size(16.0))
        .build();

    definition(
        "tls",
        "TLS/SSL",
        "Transport Layer Security provides encryption and authentication for secure communication.",
        Category::Presentation,
        Difficulty::Advanced,
        &[
            ("Client Hello", "Client initiates handshake with supported ciphers"),
            ("Server Hello", "Server responds with certificate and chosen cipher"),
            ("Key Exchange", "Pre-master secret exchanged and encrypted"),
            ("Session Keys", "Both sides generate session keys"),
            ("Encrypted", "Secure communication established"),
        ],
        scene,
    )
}

use super::{Category, Difficulty, ProtocolDefinition, definition};
use crate::{
    foundation::core::Rgba8,
    scene::{
        dsl::SceneBuilder,
        model::{Actor, BoxSize, Caption, Endpoint, Link, Marker, Placement, StepSpan},
    },
};

fn between(from: &str, to: &str, label: impl Into<String>) -> Marker {
    Marker::between(Endpoint::edge(from), Endpoint::edge(to), label)
}

pub(super) fn http() -> ProtocolDefinition {
    let request = || {
        between("browser", "server", "GET /index")
            .subtitle("Host: example.com")
            .lane(-0.08)
            .tooltip("GET /index.html HTTP/1.1 | Host: example.com | Accept: text/html | User-Agent: Mozilla/5.0")
    };

    let scene = SceneBuilder::new()
        .actor(Actor::new("browser", "BROWSER", Placement::Left).subtitle("Chrome"))
        .actor(
            Actor::new("server", "WEB SERVER", Placement::Right)
                .subtitle("nginx:443")
                .colors(Rgba8::VIOLET, Rgba8::WHITE),
        )
        .link(Link::new("browser", "server").color(Rgba8::CYAN).dashed())
        .marker(StepSpan::at(0), request().at(0.15))
        .marker(StepSpan::at(1), request().at(0.65))
        .badge(StepSpan::at(2), "server", "Processing...", Rgba8::AMBER)
        .caption(
            StepSpan::at(2),
            Caption::new("Routing /index -> index.html", 0.5, 0.15).color(Rgba8::GRAY),
        )
        .marker(
            StepSpan::at(3),
            between("server", "browser", "200 OK")
                .subtitle("text/html")
                .lane(0.08)
                .colors(Rgba8::GREEN, Rgba8::INK)
                .tooltip("HTTP/1.1 200 OK | Content-Type: text/html | Content-Length: 1256"),
        )
        .check(StepSpan::at(4), Caption::new("Page Loaded", 0.5, 0.85).size(16.0))
        .badge(StepSpan::at(4), "browser", "Rendered", Rgba8::GREEN)
        .build();

    definition(
        "http",
        "HTTP/HTTPS",
        "Hypertext Transfer Protocol - request-response protocol for web communication between browsers and servers.",
        Category::Application,
        Difficulty::Intermediate,
        &[
            ("HTTP Request", "Browser sends GET request with headers"),
            ("Request Travel", "Request travels to web server"),
            ("Server Process", "Server processes request and prepares response"),
            ("HTTP Response", "Server sends 200 OK with content"),
            ("Page Rendered", "Browser receives and renders the page"),
        ],
        scene,
    )
}

pub(super) fn dns() -> ProtocolDefinition {
    let hop = |from: &str, to: &str, label: &str, sub: &str, tip: &str, color: Rgba8| {
        Marker::between(Endpoint::center(from), Endpoint::center(to), label)
            .circle(12.0)
            .subtitle(sub)
            .colors(color, Rgba8::INK)
            .tooltip(tip)
    };

    let scene = SceneBuilder::new()
        .actor(
            Actor::new("client", "CLIENT", Placement::At { x: 0.12, y: 0.2 })
                .subtitle("192.168.1.5")
                .size(BoxSize::compact()),
        )
        .actor(
            Actor::new("resolver", "RESOLVER", Placement::At { x: 0.4, y: 0.35 })
                .subtitle("8.8.8.8")
                .colors(Rgba8::VIOLET, Rgba8::WHITE)
                .size(BoxSize::compact()),
        )
        .actor(
            Actor::new("root", "ROOT", Placement::At { x: 0.6, y: 0.5 })
                .subtitle(".")
                .colors(Rgba8::MAGENTA, Rgba8::WHITE)
                .size(BoxSize::compact()),
        )
        .actor(
            Actor::new("tld", "TLD", Placement::At { x: 0.8, y: 0.65 })
                .subtitle(".com")
                .colors(Rgba8::GREEN, Rgba8::INK)
                .size(BoxSize::compact()),
        )
        .link(Link::new("client", "resolver").color(Rgba8::CYAN).dashed())
        .link(Link::new("resolver", "root").color(Rgba8::VIOLET).dashed())
        .link(Link::new("resolver", "tld").color(Rgba8::GREEN).dashed())
        .marker(
            StepSpan::at(0),
            hop("client", "resolver", "Q", "example.com?", "Query Type: A | Recursion: True", Rgba8::CYAN),
        )
        .marker(
            StepSpan::at(1),
            hop("resolver", "root", "Q", "Root NS", "Asking for .com nameserver", Rgba8::VIOLET),
        )
        .marker(
            StepSpan::at(2),
            hop("root", "tld", "Q", ".com NS", "Delegated to TLD server", Rgba8::MAGENTA),
        )
        .marker(
            StepSpan::at(3),
            hop("tld", "resolver", "A", "93.184.216.34", "Authoritative answer", Rgba8::GREEN),
        )
        .marker(
            StepSpan::at(4),
            hop("resolver", "client", "A", "Response", "TTL: 3600s | IP: 93.184.216.34", Rgba8::GREEN),
        )
        .check(
            StepSpan::at(4),
            Caption::new("example.com = 93.184.216.34", 0.5, 0.9),
        )
        .build();

    definition(
        "dns",
        "DNS Resolution",
        "The process of translating a human-readable domain name into an IP address through DNS servers.",
        Category::Application,
        Difficulty::Beginner,
        &[
            ("Query", "Client sends DNS query for domain name"),
            ("Recursive Lookup", "DNS resolver contacts root server"),
            ("TLD Server", "Query forwarded to TLD server (.com, .org, etc.)"),
            ("Authoritative Server", "Final lookup at authoritative nameserver"),
            ("Response", "IP address returned to client"),
        ],
        scene,
    )
}

pub(super) fn dhcp() -> ProtocolDefinition {
    let to_server = |label: &str| between("client", "server", label).colors(Rgba8::CYAN, Rgba8::INK);
    let to_client = |label: &str| between("server", "client", label).colors(Rgba8::VIOLET, Rgba8::WHITE);

    let scene = SceneBuilder::new()
        .actor(Actor::new("client", "CLIENT", Placement::Left).subtitle("0.0.0.0"))
        .actor(
            Actor::new("server", "DHCP SERVER", Placement::Right)
                .subtitle("192.168.1.1")
                .colors(Rgba8::VIOLET, Rgba8::WHITE),
        )
        .link(Link::new("client", "server").dashed())
        .marker(
            StepSpan::at(0),
            to_server("DISCOVER")
                .lane(-0.09)
                .subtitle("Broadcast")
                .tooltip("Broadcast | Transaction ID: 0x3d1d | Options: Requested IP"),
        )
        .marker(
            StepSpan::at(1),
            to_client("OFFER")
                .lane(-0.03)
                .subtitle("192.168.1.100")
                .tooltip("Offered IP: 192.168.1.100 | Lease: 86400s | Gateway: 192.168.1.1"),
        )
        .marker(
            StepSpan::at(2),
            to_server("REQUEST")
                .lane(0.03)
                .subtitle("192.168.1.100")
                .tooltip("Requesting: 192.168.1.100 | Client ID: MAC"),
        )
        .marker(
            StepSpan::at(3),
            between("server", "client", "ACK")
                .lane(0.09)
                .subtitle("Confirmed")
                .colors(Rgba8::GREEN, Rgba8::INK)
                .tooltip("Confirmed IP: 192.168.1.100 | DNS: 8.8.8.8"),
        )
        .badge(StepSpan::at(3), "client", "IP: 192.168.1.100", Rgba8::GREEN)
        .build();

    definition(
        "dhcp",
        "DHCP",
        "Dynamic Host Configuration Protocol automatically assigns IP addresses to devices on a network.",
        Category::Application,
        Difficulty::Intermediate,
        &[
            ("Discover", "Client broadcasts DHCP Discover message"),
            ("Offer", "Server responds with IP address offer"),
            ("Request", "Client requests the offered IP address"),
            ("Acknowledge", "Server confirms and assigns the IP address"),
        ],
        scene,
    )
}

pub(super) fn ftp() -> ProtocolDefinition {
    const CONTROL: f64 = -0.1;
    const DATA: f64 = 0.1;

    let command = |label: &str, sub: &str, tip: &str| {
        between("client", "server", label)
            .lane(CONTROL)
            .subtitle(sub)
            .tooltip(tip)
    };
    let block = |n: usize| {
        between("server", "client", format!("Block {n}"))
            .lane(DATA)
            .colors(Rgba8::GREEN, Rgba8::INK)
            .tooltip(format!("file.txt | Block {n} of 3 | Mode: Binary"))
    };

    let scene = SceneBuilder::new()
        .actor(Actor::new("client", "FTP CLIENT", Placement::Left).subtitle("192.168.1.50"))
        .actor(
            Actor::new("server", "FTP SERVER", Placement::Right)
                .subtitle("ftp.example.com")
                .colors(Rgba8::VIOLET, Rgba8::WHITE),
        )
        .link(
            Link::new("client", "server").color(Rgba8::CYAN)
                .lane(CONTROL)
                .label("Control (Port 21)"),
        )
        .link(
            Link::new("client", "server").color(Rgba8::GREEN)
                .lane(DATA)
                .dashed()
                .label("Data (Port 20)"),
        )
        .marker(
            StepSpan::at(0),
            command("CONN", "Port 21", "TCP connect | Port: 21 | Channel: Control"),
        )
        .marker(
            StepSpan::at(1),
            command("AUTH", "USER & PASS", "USER anonymous | PASS ******** | 230 Login OK"),
        )
        .marker(
            StepSpan::at(2),
            command("RETR", "RETR file.txt", "RETR file.txt | TYPE I | 150 Opening data connection"),
        )
        .marker(StepSpan::at(3), block(1).at(0.75))
        .marker(StepSpan::at(3), block(2).at(0.5))
        .marker(StepSpan::at(3), block(3).at(0.25))
        .caption(
            StepSpan::at(3),
            Caption::new("Transferring file.txt...", 0.5, 0.85).color(Rgba8::GREEN),
        )
        .check(StepSpan::at(4), Caption::new("Transfer Complete", 0.5, 0.85).size(16.0))
        .badge(StepSpan::at(4), "client", "file.txt saved", Rgba8::GREEN)
        .build();

    definition(
        "ftp",
        "FTP",
        "File Transfer Protocol uses separate control and data channels for reliable file transfer.",
        Category::Application,
        Difficulty::Intermediate,
        &[
            ("Connection", "Client connects to FTP server (Port 21)"),
            ("Authentication", "Username and password verification"),
            ("Command", "Client sends RETR command for file"),
            ("Data Transfer", "File transferred via data channel (Port 20)"),
            ("Complete", "Transfer complete, connection closed"),
        ],
        scene,
    )
}

pub(super) fn smtp() -> ProtocolDefinition {
    let scene = SceneBuilder::new()
        .actor(Actor::new("client", "MAIL CLIENT", Placement::Left).subtitle("user@example.com"))
        .actor(
            Actor::new("server", "SMTP SERVER", Placement::At { x: 0.5, y: 0.5 })
                .subtitle("mail.example.com")
                .colors(Rgba8::VIOLET, Rgba8::WHITE),
        )
        .actor(
            Actor::new("recipient", "RECIPIENT", Placement::Right)
                .subtitle("dest@mail.com")
                .colors(Rgba8::GREEN, Rgba8::INK),
        )
        .link(Link::new("client", "server").color(Rgba8::CYAN).dashed())
        .link(Link::new("server", "recipient").color(Rgba8::GREEN).dashed())
        .badge(StepSpan::at(0), "client", "Composing...", Rgba8::AMBER)
        .marker(
            StepSpan::at(1),
            between("client", "server", "HELO")
                .lane(-0.08)
                .subtitle("EHLO example.com")
                .tooltip("EHLO example.com | 250-mail.example.com | AUTH LOGIN"),
        )
        .marker(
            StepSpan::at(2),
            between("client", "server", "MAIL DATA")
                .lane(0.08)
                .subtitle("From:/To:")
                .tooltip("MAIL FROM:<user@example.com> | RCPT TO:<dest@mail.com> | DATA"),
        )
        .marker(
            StepSpan::at(3),
            between("server", "recipient", "FORWARD")
                .subtitle("mx.mail.com:25")
                .colors(Rgba8::VIOLET, Rgba8::WHITE)
                .tooltip("Relay to mx.mail.com | Port: 25 | Queue ID: 4F2A9"),
        )
        .check(StepSpan::at(4), Caption::new("Email Delivered", 0.5, 0.85).size(16.0))
        .badge(StepSpan::at(4), "recipient", "1 new message", Rgba8::GREEN)
        .build();

    definition(
        "smtp",
        "SMTP",
        "Simple Mail Transfer Protocol handles email transmission between mail servers.",
        Category::Application,
        Difficulty::Intermediate,
        &[
            ("Compose", "User composes email in mail client"),
            ("SMTP Handshake", "Client connects and authenticates with SMTP server"),
            ("Mail Data", "Email headers and body transmitted"),
            ("Forward", "SMTP server forwards to recipient's mail server"),
            ("Delivered", "Email delivered to recipient's mailbox"),
        ],
        scene,
    )
}

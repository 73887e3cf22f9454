use super::*;
use crate::scene::dsl::SceneBuilder;

fn registry() -> &'static Registry {
    Registry::builtin().unwrap()
}

#[test]
fn builtin_catalogue_is_complete_and_ordered() {
    let ids: Vec<_> = registry().ids().collect();
    assert_eq!(
        ids,
        [
            "stop-and-wait",
            "go-back-n",
            "selective-repeat",
            "tcp-handshake",
            "udp",
            "http",
            "dns",
            "arp",
            "icmp",
            "dhcp",
            "ftp",
            "smtp",
            "tls",
        ]
    );
    assert_eq!(registry().len(), 13);
}

#[test]
fn tcp_handshake_has_four_steps() {
    let tcp = registry().get("tcp-handshake").unwrap();
    let titles: Vec<_> = tcp.steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["SYN", "SYN-ACK", "ACK", "Connected"]);
    assert_eq!(tcp.category, Category::Transport);
    assert_eq!(tcp.difficulty, Difficulty::Intermediate);
    assert_eq!(tcp.last_index(), 3);
}

#[test]
fn categories_and_difficulties_match_catalogue() {
    let expect = [
        ("stop-and-wait", Category::DataLink, Difficulty::Beginner),
        ("go-back-n", Category::DataLink, Difficulty::Intermediate),
        ("selective-repeat", Category::DataLink, Difficulty::Advanced),
        ("udp", Category::Transport, Difficulty::Beginner),
        ("dns", Category::Application, Difficulty::Beginner),
        ("arp", Category::Network, Difficulty::Beginner),
        ("tls", Category::Presentation, Difficulty::Advanced),
    ];
    for (id, cat, diff) in expect {
        let def = registry().get(id).unwrap();
        assert_eq!((def.category, def.difficulty), (cat, diff), "{id}");
    }
}

#[test]
fn ordinals_are_one_based() {
    for def in registry().iter() {
        for (i, step) in def.steps.iter().enumerate() {
            assert_eq!(step.ordinal as usize, i + 1, "{}", def.id);
        }
    }
}

#[test]
fn lookup_distinguishes_unknown_ids() {
    assert!(matches!(registry().lookup("dns"), Lookup::Found(d) if d.name == "DNS Resolution"));
    assert_eq!(
        registry().lookup("not-a-protocol"),
        Lookup::Unknown {
            requested: "not-a-protocol"
        }
    );
    let err = registry().require("not-a-protocol").unwrap_err();
    assert!(matches!(err, ProtovizError::UnknownProtocol(ref id) if id == "not-a-protocol"));
}

fn tiny(id: &str) -> ProtocolDefinition {
    definition(
        id,
        "Tiny",
        "",
        Category::Network,
        Difficulty::Beginner,
        &[("One", "first")],
        SceneBuilder::new().build(),
    )
}

#[test]
fn registry_rejects_duplicates_and_empty_steps() {
    assert!(Registry::new(vec![tiny("a"), tiny("b")]).is_ok());
    assert!(Registry::new(vec![tiny("a"), tiny("a")]).is_err());

    let mut empty = tiny("e");
    empty.steps.clear();
    assert!(Registry::new(vec![empty]).is_err());

    let mut bad = tiny("o");
    bad.steps[0].ordinal = 2;
    assert!(Registry::new(vec![bad]).is_err());
}

#[test]
fn category_parses_labels_and_kebab_case() {
    assert_eq!("Data Link".parse::<Category>().unwrap(), Category::DataLink);
    assert_eq!("data-link".parse::<Category>().unwrap(), Category::DataLink);
    assert_eq!("APPLICATION".parse::<Category>().unwrap(), Category::Application);
    assert!("physical".parse::<Category>().is_err());
    assert_eq!(Category::DataLink.to_string(), "Data Link");
}

use super::*;

#[test]
fn parses_the_three_views() {
    assert_eq!(Route::parse("/"), Route::Landing);
    assert_eq!(Route::parse(""), Route::Landing);
    assert_eq!(Route::parse("/protocols"), Route::List);
    assert_eq!(Route::parse("/protocols/"), Route::List);
    assert_eq!(
        Route::parse("/protocols/tcp-handshake"),
        Route::Detail("tcp-handshake".to_string())
    );
}

#[test]
fn singular_detail_path_and_query_are_accepted() {
    assert_eq!(
        Route::parse("/protocol/dns?speed=2#log"),
        Route::Detail("dns".to_string())
    );
}

#[test]
fn anything_else_is_not_found() {
    assert_eq!(
        Route::parse("/about"),
        Route::NotFound("/about".to_string())
    );
    assert_eq!(
        Route::parse("/protocols/dns/extra"),
        Route::NotFound("/protocols/dns/extra".to_string())
    );
}

#[test]
fn paths_round_trip() {
    for r in [
        Route::Landing,
        Route::List,
        Route::Detail("udp".to_string()),
    ] {
        assert_eq!(Route::parse(&r.path()), r);
    }
    assert_eq!(Route::Detail("arp".to_string()).to_string(), "/protocols/arp");
}

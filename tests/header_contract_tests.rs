use secure_headers::{
    ContentSecurityPolicy, FrameOptions, Header, HeaderError, StrictTransportSecurity, XssFilter,
};

fn assert_send_sync<T: Send + Sync>() {}

/// Every builder answers to the same two-method contract through `dyn Header`
#[test]
fn test_header_names_through_trait_objects() {
    let headers: Vec<Box<dyn Header>> = vec![
        Box::new(ContentSecurityPolicy::new()),
        Box::new(FrameOptions::new()),
        Box::new(StrictTransportSecurity::new()),
        Box::new(XssFilter::new()),
    ];

    let names: Vec<&str> = headers.iter().map(|h| h.name()).collect();
    assert_eq!(
        names,
        vec![
            "Content-Security-Policy",
            "X-Frame-Options",
            "Strict-Transport-Security",
            "X-Xss-Protection",
        ]
    );

    for header in &headers {
        let value = header.compile();
        assert!(!value.is_empty(), "{} should compile to a value", header.name());
        assert!(
            !value.chars().any(|c| c.is_control()),
            "{} value should be free of control characters: {:?}",
            header.name(),
            value
        );
    }
}

#[test]
fn test_builders_are_thread_safe_values() {
    assert_send_sync::<ContentSecurityPolicy>();
    assert_send_sync::<FrameOptions>();
    assert_send_sync::<StrictTransportSecurity>();
    assert_send_sync::<XssFilter>();
}

/// Chaining mirrors the documented usage of the CSP builder
#[test]
fn test_csp_chaining() {
    let value = ContentSecurityPolicy::new()
        .with_images_from_self()
        .with_images_from_domain("example.com")
        .with_scripts_from_self()
        .with_scripts_from_domain("js.example.com")
        .with_connect_to_self()
        .with_nonce("integration-chain")
        .compile();

    assert!(value.contains("img-src 'self' example.com 'nonce-integration-chain'"));
    assert!(value.contains("script-src 'self' js.example.com 'nonce-integration-chain'"));
    assert!(value.contains("connect-src 'self'"));
    assert!(value.starts_with("default-src 'none'; "));
}

#[test]
fn test_csp_duplicate_domains_listed_once() {
    let value = ContentSecurityPolicy::new()
        .with_stylesheets_from_domain("css.example.com")
        .with_stylesheets_from_domain("fonts.example.com")
        .with_stylesheets_from_domain("css.example.com")
        .with_nonce("n")
        .compile();

    assert_eq!(value.matches("css.example.com").count(), 1);
    assert!(value.contains("style-src css.example.com fonts.example.com 'nonce-n'"));
}

#[test]
fn test_csp_nonce_shared_by_every_clause() {
    let csp = ContentSecurityPolicy::new()
        .with_scripts_from_domain("js.example.com")
        .with_stylesheets_from_self();
    let token = format!("'nonce-{}'", csp.nonce());
    let value = csp.compile();

    for directive in ["script-src", "style-src", "img-src"] {
        let clause = value
            .split("; ")
            .find(|clause| clause.starts_with(directive))
            .unwrap_or_else(|| panic!("{directive} clause should be present in {value}"));
        assert!(
            clause.ends_with(&token),
            "{directive} clause should end with {token}, got: {clause}"
        );
    }
}

#[test]
fn test_csp_connect_only_when_requested() {
    let csp = ContentSecurityPolicy::new();
    assert!(!csp.compile().contains("connect-src"));
    assert_eq!(
        csp.with_connect_to_self()
            .compile()
            .matches("connect-src 'self'")
            .count(),
        1
    );
}

#[test]
fn test_frame_options_equivalent_origins() {
    for input in ["example.com", "example.com/", "http://example.com", "http://example.com/"] {
        assert_eq!(
            FrameOptions::new().with_allow_from(input).compile(),
            "ALLOW-FROM http://example.com/",
            "Input {input:?} should normalize to the same origin"
        );
    }
}

#[test]
fn test_hsts_error_kinds() {
    let sts = StrictTransportSecurity::new();

    assert!(matches!(
        sts.with_timeout(300),
        Err(HeaderError::ValueTooSmall { given: 300, minimum: 15_778_800 })
    ));
    assert!(matches!(
        sts.with_preload(),
        Err(HeaderError::SupportingDirectiveNotActivated { .. })
    ));

    let sts = sts
        .with_timeout(15_778_800)
        .expect("six months should be accepted");
    assert_eq!(sts.timeout(), 15_778_800);
}

#[test]
fn test_hsts_preload_requires_subdomains_first() {
    let sts = StrictTransportSecurity::new();
    assert!(sts.with_preload().is_err());

    // Adding subdomains afterwards does not revive the rejected preload
    let with_subdomains = sts.with_subdomains();
    assert_eq!(with_subdomains.compile(), "max-age=15778800; includeSubDomains");

    let preloaded = with_subdomains
        .with_preload()
        .expect("preload should be accepted after subdomains");
    assert_eq!(
        preloaded.compile(),
        "max-age=15778800; includeSubDomains; preload"
    );
}

/// Configuring a builder never changes the receiver's compiled value
#[test]
fn test_configuration_leaves_receiver_untouched() {
    let csp = ContentSecurityPolicy::new();
    let csp_before = csp.compile();
    let _ = csp
        .with_scripts_from_self()
        .with_images_from_domain("img.example.com")
        .with_connect_to_self();
    let _ = csp.with_nonce("replacement");
    assert_eq!(csp.compile(), csp_before);

    let xfo = FrameOptions::new();
    let _ = xfo.with_allow_from("example.com");
    let _ = xfo.with_allow_from_self();
    assert_eq!(xfo.compile(), "DENY");

    let sts = StrictTransportSecurity::new();
    let _ = sts.with_subdomains();
    let _ = sts.with_timeout_unsafe(60);
    let _ = sts.with_timeout(StrictTransportSecurity::ONE_YEAR);
    assert_eq!(sts.compile(), "max-age=15778800");

    let xss = XssFilter::new();
    let _ = xss.with_filter_and_block();
    assert_eq!(xss.compile(), "0");
}

#[test]
fn test_display_matches_compile() {
    let csp = ContentSecurityPolicy::new().with_scripts_from_self();
    let xfo = FrameOptions::new().with_allow_from("example.com");
    let sts = StrictTransportSecurity::new().with_subdomains();
    let xss = XssFilter::new().with_filter_and_block();

    assert_eq!(csp.to_string(), csp.compile());
    assert_eq!(xfo.to_string(), xfo.compile());
    assert_eq!(sts.to_string(), sts.compile());
    assert_eq!(xss.to_string(), xss.compile());
}

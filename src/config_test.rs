use super::*;

/// # Safety
/// Tests touching these vars share process env; each test resets them first.
unsafe fn clear_site_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_DIR");
        std::env::remove_var("RESEND_API_KEY");
        std::env::remove_var("CONTACT_FROM_EMAIL");
        std::env::remove_var("CONTACT_TO_EMAIL");
    }
}

static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[test]
fn site_config_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_site_env() };

    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.site_dir.ends_with("site"));
}

#[test]
fn site_config_reads_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_site_env();
        std::env::set_var("PORT", " 8080 ");
        std::env::set_var("SITE_DIR", "/srv/www");
    }

    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_dir, PathBuf::from("/srv/www"));

    unsafe { clear_site_env() };
}

#[test]
fn site_config_rejects_bad_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_site_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = SiteConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));

    unsafe { clear_site_env() };
}

#[test]
fn mail_config_reads_all_three_vars() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_site_env();
        std::env::set_var("RESEND_API_KEY", "re_test");
        std::env::set_var("CONTACT_FROM_EMAIL", "site@broker.test");
        std::env::set_var("CONTACT_TO_EMAIL", "desk@broker.test");
    }

    let cfg = MailConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "re_test");
    assert_eq!(
        cfg.addresses,
        MailAddresses { from: "site@broker.test".into(), to: "desk@broker.test".into() }
    );

    unsafe { clear_site_env() };
}

#[test]
fn mail_config_missing_key_names_the_var() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_site_env();
        std::env::set_var("CONTACT_FROM_EMAIL", "site@broker.test");
        std::env::set_var("CONTACT_TO_EMAIL", "desk@broker.test");
    }

    let err = MailConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "RESEND_API_KEY" }));

    unsafe { clear_site_env() };
}

#[test]
fn mail_config_blank_value_counts_as_missing() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_site_env();
        std::env::set_var("RESEND_API_KEY", "re_test");
        std::env::set_var("CONTACT_FROM_EMAIL", "   ");
        std::env::set_var("CONTACT_TO_EMAIL", "desk@broker.test");
    }

    let err = MailConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "CONTACT_FROM_EMAIL" }));

    unsafe { clear_site_env() };
}

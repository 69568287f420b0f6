use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Verdant",
    project_url: "https://verdant.finance",
    contacts: "link:https://docs.verdant.finance/security/bug-bounty",
    policy: "https://github.com/verdant-finance/verdant/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/verdant-finance/verdant"
}

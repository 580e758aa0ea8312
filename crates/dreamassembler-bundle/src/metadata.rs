//! Fixed metadata injected into launcher archives.
//!
//! MultiMC/Prism read `mmc-pack.json` from the instance root to decide which
//! game, LWJGL and Forge components to install. The content is the same for
//! every release, so it is embedded verbatim rather than generated.

/// Tag appended to launcher archive names.
pub const LAUNCHER_TAG: &str = "MMC";

/// File name of the launcher component list, relative to the instance root.
pub const MMC_PACK_FILE: &str = "mmc-pack.json";

/// Component list for a Forge 1.7.10 instance.
pub const MMC_PACK_JSON: &str = r#"{
    "components": [
        {
            "cachedName": "LWJGL 2",
            "cachedVersion": "2.9.4-nightly-20150209",
            "cachedVolatile": true,
            "dependencyOnly": true,
            "uid": "org.lwjgl",
            "version": "2.9.4-nightly-20150209"
        },
        {
            "cachedName": "Minecraft",
            "cachedRequires": [
                {
                    "suggests": "2.9.4-nightly-20150209",
                    "uid": "org.lwjgl"
                }
            ],
            "cachedVersion": "1.7.10",
            "important": true,
            "uid": "net.minecraft",
            "version": "1.7.10"
        },
        {
            "cachedName": "Forge",
            "cachedRequires": [
                {
                    "equals": "1.7.10",
                    "uid": "net.minecraft"
                }
            ],
            "cachedVersion": "10.13.4.1614",
            "uid": "net.minecraftforge",
            "version": "10.13.4.1614"
        }
    ],
    "formatVersion": 1
}
"#;

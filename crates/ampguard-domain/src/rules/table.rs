use super::{ALL, Condition, MAC_LINUX, MAC_WINDOWS, Root, RuleSpec, Test, WINDOWS};
use ampguard_types::ids;

const fn eq(path: &'static [&'static str], lit: &'static str) -> Condition {
    Condition {
        path,
        test: Test::Equals(lit),
    }
}

const fn ttl(path: &'static [&'static str]) -> Condition {
    Condition {
        path,
        test: Test::AboveTtlCeiling,
    }
}

const EXPREV_AUDIT_MASK: u32 = 0x0000_033B;

const TTL_DESCRIPTION: &str = "\
Cloud lookup verdicts are cached on the endpoint for the configured TTL. A long TTL
means a file whose disposition changes in the cloud keeps its stale verdict locally
until the cache entry expires.";

const UI_DESCRIPTION: &str = "\
The connector user interface exposes this information to the logged-in user. Showing
exclusions or detection details tells an attacker with user access what is not
watched.";

/// The rule table, in evaluation order.
///
/// Ids are unique per platform. The driver family appears twice with disjoint platform
/// sets because Windows and Mac/Linux agents report it in a different order.
pub static RULES: &[RuleSpec] = &[
    RuleSpec {
        id: ids::RULE_CONTROL_PASSWORD_PROTECTION,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[Condition {
            path: &["control", "passwordex"],
            test: Test::Absent,
        }],
        message: "AMP installation is not protected by password. Change this in 'Administrative Features > Enable Connector Protection'",
        title: "Connector Protection",
        description: "\
Without a connector protection password, any local administrator can stop or
uninstall the agent.",
    },
    // Cloud cache TTLs
    RuleSpec {
        id: ids::RULE_CLOUD_TTL_UNKNOWN,
        platforms: ALL,
        root: Root::Agent,
        conditions: &[ttl(&["cloud", "cache", "ttl", "unknown"])],
        message: "Potentially long TTL on unknown hash lookup : {value}. Change this in 'Advance Settings > Cache'",
        title: "Unknown Verdict Cache TTL",
        description: TTL_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_CLOUD_TTL_CLEAN,
        platforms: ALL,
        root: Root::Agent,
        conditions: &[ttl(&["cloud", "cache", "ttl", "clean"])],
        message: "Potentially long TTL on clean hash lookup : {value}. Change this in 'Advance Settings > Cache'",
        title: "Clean Verdict Cache TTL",
        description: TTL_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_CLOUD_TTL_MALICIOUS,
        platforms: ALL,
        root: Root::Agent,
        conditions: &[ttl(&["cloud", "cache", "ttl", "malicious"])],
        message: "Potentially long TTL on malicious hash lookup : {value}. Change this in 'Advance Settings > Cache'",
        title: "Malicious Verdict Cache TTL",
        description: TTL_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_CLOUD_TTL_UNSEEN,
        platforms: ALL,
        root: Root::Agent,
        conditions: &[ttl(&["cloud", "cache", "ttl", "unseen"])],
        message: "Potentially long TTL on unseen hash lookup : {value}. Change this in 'Advance Settings > Cache'",
        title: "Unseen Verdict Cache TTL",
        description: TTL_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_CLOUD_TTL_BLOCK,
        platforms: ALL,
        root: Root::Agent,
        conditions: &[ttl(&["cloud", "cache", "ttl", "block"])],
        message: "Potentially long TTL on block hash lookup : {value}. Change this in 'Advance Settings > Cache'",
        title: "Block Verdict Cache TTL",
        description: TTL_DESCRIPTION,
    },
    // Behavioral protection
    RuleSpec {
        id: ids::RULE_APDE_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["apde", "enable"], "0")],
        message: "Behavioral Protection is disabled. Change this in 'Modes and Engines > Behavioral Protection'",
        title: "Behavioral Protection Disabled",
        description: "The behavioral protection engine (APDE) is switched off.",
    },
    RuleSpec {
        id: ids::RULE_APDE_AUDIT_MODE,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["apde", "enable"], "1"), eq(&["apde", "mode"], "0")],
        message: "Behavioral Protection is set to AUDIT. Change this in 'Modes and Engines > Behavioral Protection'",
        title: "Behavioral Protection in Audit Mode",
        description: "Behavioral protection is enabled but only records matches without blocking.",
    },
    // Windows driver
    RuleSpec {
        id: ids::RULE_DRIVER_FILE_AUDIT_MODE,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[
            eq(&["driver", "blockexecqaction"], "0"),
            eq(&["driver", "protmode", "qaction"], "0"),
        ],
        message: "FILE protection is set to AUDIT. Change this in 'Modes and Engines > File'",
        title: "File Protection in Audit Mode",
        description: "Malicious files are detected but neither quarantined nor blocked from executing.",
    },
    RuleSpec {
        id: ids::RULE_DRIVER_FILE_MONITORING_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["driver", "protmode", "file"], "0")],
        message: "Monitor File Copies and Moves Execution is DISABLED. Change this in 'Advance Settings > File and Process Scan'",
        title: "File Copy/Move Monitoring Disabled",
        description: "Files copied or moved on disk are not scanned.",
    },
    RuleSpec {
        id: ids::RULE_DRIVER_PROCESS_MONITORING_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["driver", "protmode", "process"], "0")],
        message: "Monitor Process Execution is DISABLED. Change this in 'Advance Settings > File and Process Scan'",
        title: "Process Execution Monitoring Disabled",
        description: "Executables are not scanned when they start.",
    },
    RuleSpec {
        id: ids::RULE_DRIVER_SPP_AUDIT_MODE,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["driver", "selfprotect", "spp_qaction"], "0")],
        message: "System Process Protection is set to AUDIT. Change this in 'Modes and Engines > Malicious Activity Protection > System Process Protection'",
        title: "System Process Protection in Audit Mode",
        description: "Access to protected system processes (e.g. LSASS) is logged but not blocked.",
    },
    RuleSpec {
        id: ids::RULE_DRIVER_SPP_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[
            eq(&["driver", "selfprotect", "spp"], "0"),
            eq(&["driver", "selfprotect", "mkp"], "0"),
            eq(&["driver", "selfprotect", "sde"], "0"),
            eq(&["driver", "selfprotect", "spp_qaction"], "1"),
        ],
        message: "System Process Protection is set to DISABLED. Change this in 'Modes and Engines > Malicious Activity Protection > System Process Protection'",
        title: "System Process Protection Disabled",
        description: "All system process protection switches are off.",
    },
    RuleSpec {
        id: ids::RULE_DRIVER_PASSIVE_ON_EXECUTE,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["driver", "protmode", "activeexec"], "0")],
        message: "On Execute Mode is set to PASSIVE. Change this in 'Advance Settings > File and Process Scan'",
        title: "Passive On-Execute Mode",
        description: "\
In passive mode a file is allowed to run while the cloud lookup is still pending, so
a first-seen malicious binary gets to execute.",
    },
    // Endpoint isolation
    RuleSpec {
        id: ids::RULE_ISOLATION_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["endpointisolation", "enable"], "0")],
        message: "Endpoint Isolation feature is disabled. Change this in 'Advance Settings > Endpoint Isolation'",
        title: "Endpoint Isolation Disabled",
        description: "Compromised hosts cannot be isolated from the network from the console.",
    },
    RuleSpec {
        id: ids::RULE_ISOLATION_PROXY_ALLOWED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[
            eq(&["endpointisolation", "enable"], "1"),
            eq(&["endpointisolation", "allowproxy"], "1"),
        ],
        message: "Endpoint Isolation feature is ENABLED and access to proxy is enabled. Change this in 'Advance Settings > Endpoint Isolation'",
        title: "Isolation Allows Proxy",
        description: "Isolated hosts keep access to the configured proxy.",
    },
    RuleSpec {
        id: ids::RULE_ISOLATION_PROXY_BLOCKED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[
            eq(&["endpointisolation", "enable"], "1"),
            eq(&["endpointisolation", "allowproxy"], "0"),
        ],
        message: "Endpoint Isolation feature is ENABLED and access to proxy is disabled. Change this in 'Advance Settings > Endpoint Isolation'",
        title: "Isolation Blocks Proxy",
        description: "\
Isolated hosts lose proxy access. In proxied networks this also cuts the agent off
from the cloud.",
    },
    // Orbital
    RuleSpec {
        id: ids::RULE_ORBITAL_DISABLED,
        platforms: WINDOWS,
        root: Root::Config,
        conditions: &[eq(&["orbital", "enablemsi"], "0")],
        message: "ORBITAL is disabled. Change this in 'Advance Settings > Orbital'",
        title: "Orbital Disabled",
        description: "Orbital advanced search (live endpoint queries) is not installed.",
    },
    // Scan engines
    RuleSpec {
        id: ids::RULE_SCAN_ETHOS_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["scansettings", "ethos", "enable"], "0")],
        message: "ETHOS engine is disabled. Change this in 'Advance Settings > Engines'",
        title: "ETHOS Disabled",
        description: "The ETHOS generic signature engine is off.",
    },
    RuleSpec {
        id: ids::RULE_SCAN_ETHOS_COPY_MOVE_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[
            eq(&["scansettings", "ethos", "enable"], "1"),
            eq(&["scansettings", "ethos", "file"], "0"),
        ],
        message: "ETHOS engine is ENABLED but ON COPY/MOVE scanning is disabled. Change this in 'Advance Settings > Engines'",
        title: "ETHOS Copy/Move Scanning Disabled",
        description: "ETHOS runs but does not look at files when they are copied or moved.",
    },
    RuleSpec {
        id: ids::RULE_SCAN_NETWORK_DRIVES_UNMONITORED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["scansettings", "ssd"], "0")],
        message: "Monitoring of Network Drives is diabled. Change this in 'Advance Settings > Engines'",
        title: "Network Drives Not Monitored",
        description: "Files on mapped network drives are not scanned.",
    },
    RuleSpec {
        id: ids::RULE_SCAN_SPERO_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["scansettings", "spero", "enable"], "0")],
        message: "SPERO engine is disabled. Change this in 'Advance Settings > Engines'",
        title: "SPERO Disabled",
        description: "The SPERO machine-learning engine is off.",
    },
    RuleSpec {
        id: ids::RULE_SCAN_TETRA_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["scansettings", "tetra", "enable"], "0")],
        message: "TETRA engine is disabled. Change this in 'Advance Settings > TETRA'",
        title: "TETRA Disabled",
        description: "The TETRA offline antivirus engine is off.",
    },
    RuleSpec {
        id: ids::RULE_SCAN_TETRA_ARCHIVES_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[
            eq(&["scansettings", "tetra", "enable"], "1"),
            eq(&["scansettings", "tetra", "options", "ondemand", "scanarchives"], "0"),
        ],
        message: "TETRA engine is ENABLED but ARCHIVE scan is disabled. Change this in 'Advance Settings > TETRA'",
        title: "TETRA Archive Scanning Disabled",
        description: "On-demand TETRA scans skip the contents of archives.",
    },
    RuleSpec {
        id: ids::RULE_SCAN_TETRA_PACKED_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[
            eq(&["scansettings", "tetra", "enable"], "1"),
            eq(&["scansettings", "tetra", "options", "ondemand", "scanpacked"], "0"),
        ],
        message: "TETRA engine is ENABLED but PACKED FILE scan is disabled. Change this in 'Advance Settings > TETRA'",
        title: "TETRA Packed File Scanning Disabled",
        description: "On-demand TETRA scans do not unpack packed executables.",
    },
    RuleSpec {
        id: ids::RULE_SCAN_TETRA_DEEPSCAN_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[
            eq(&["scansettings", "tetra", "enable"], "1"),
            eq(&["scansettings", "tetra", "options", "ondemand", "deepscan"], "0"),
        ],
        message: "TETRA engine is ENABLED but DEEP scan is disabled. Change this in 'Advance Settings > TETRA'",
        title: "TETRA Deep Scanning Disabled",
        description: "On-demand TETRA scans run without deep file inspection.",
    },
    // Malicious activity protection
    RuleSpec {
        id: ids::RULE_HEURISTIC_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["heuristic", "enable"], "0")],
        message: "Malicious Activity Protection is DISABLED. Change this in 'Modes and Engines > Malicious Activity Protection'",
        title: "Malicious Activity Protection Disabled",
        description: "Ransomware-style behaviour (mass file encryption and the like) is not detected.",
    },
    RuleSpec {
        id: ids::RULE_HEURISTIC_AUDIT_MODE,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["heuristic", "enable"], "1"), eq(&["heuristic", "qaction"], "0")],
        message: "Malicious Activity Protection is ENABLED but set to AUDIT mode. Change this in 'Modes and Engines > Malicious Activity Protection'",
        title: "Malicious Activity Protection in Audit Mode",
        description: "Malicious activity is detected and logged but the process keeps running.",
    },
    RuleSpec {
        id: ids::RULE_HEURISTIC_QUARANTINE_MODE,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["heuristic", "enable"], "1"), eq(&["heuristic", "qaction"], "1")],
        message: "Malicious Activity Protection is ENABLED but set to QUARANTINE mode. Change this in 'Modes and Engines > Malicious Activity Protection'",
        title: "Malicious Activity Protection in Quarantine Mode",
        description: "The offending binary is quarantined but the running process is not blocked.",
    },
    // Exploit prevention
    RuleSpec {
        id: ids::RULE_EXPREV_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["exprev", "enable"], "0")],
        message: "Exploit Prevention is disabled. Change this in 'Modes and Engines > Exploit Protection'",
        title: "Exploit Prevention Disabled",
        description: "Memory exploit mitigations are not injected into protected processes.",
    },
    RuleSpec {
        id: ids::RULE_EXPREV_AUDIT_MODE,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[
            eq(&["exprev", "enable"], "1"),
            Condition {
                path: &["exprev", "v4", "options"],
                test: Test::HexEquals(EXPREV_AUDIT_MASK),
            },
        ],
        message: "Exploit Prevention is set to AUDIT. Change this in 'Modes and Engines > Exploit Protection'",
        title: "Exploit Prevention in Audit Mode",
        description: "\
Exploit prevention is enabled with the audit option mask `0x0000033B`: exploit
attempts are reported but the process is not terminated.",
    },
    // Script protection
    RuleSpec {
        id: ids::RULE_AMSI_DISABLED,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["amsi", "enable"], "0")],
        message: "Script Protection engine is disabled. Change this in 'Modes and Engines > Script Protection'",
        title: "Script Protection Disabled",
        description: "Scripts passed through AMSI (PowerShell, VBScript, ...) are not inspected.",
    },
    RuleSpec {
        id: ids::RULE_AMSI_AUDIT_MODE,
        platforms: WINDOWS,
        root: Root::Agent,
        conditions: &[eq(&["amsi", "enable"], "1"), eq(&["amsi", "mode"], "0")],
        message: "Script Protection is ENABLED and engine is set to AUDIT. Change this in 'Modes and Engines > Script Protection'",
        title: "Script Protection in Audit Mode",
        description: "Malicious scripts are reported but still run.",
    },
    // Mac and Linux driver
    RuleSpec {
        id: ids::RULE_DRIVER_FILE_BLOCKING_AUDIT_MODE,
        platforms: MAC_LINUX,
        root: Root::Agent,
        conditions: &[eq(&["driver", "protmode", "qaction"], "0")],
        message: "FILE blocking is set to AUDIT mode. Change this in 'Modes and Engines > Conviction Modes > Files'",
        title: "File Blocking in Audit Mode",
        description: "Malicious files are detected but not quarantined.",
    },
    RuleSpec {
        id: ids::RULE_DRIVER_PROCESS_MONITORING_DISABLED,
        platforms: MAC_LINUX,
        root: Root::Agent,
        conditions: &[eq(&["driver", "protmode", "process"], "0")],
        message: "Monitor Process Execution is DISABLED. Change this in 'Advance Settings > File and Process Scan'",
        title: "Process Execution Monitoring Disabled",
        description: "Executables are not scanned when they start.",
    },
    RuleSpec {
        id: ids::RULE_DRIVER_FILE_MONITORING_DISABLED,
        platforms: MAC_LINUX,
        root: Root::Agent,
        conditions: &[eq(&["driver", "protmode", "file"], "0")],
        message: "Monitor File Copies and Moves Execution is DISABLED. Change this in 'Advance Settings > File and Process Scan'",
        title: "File Copy/Move Monitoring Disabled",
        description: "Files copied or moved on disk are not scanned.",
    },
    RuleSpec {
        id: ids::RULE_DRIVER_PASSIVE_ON_EXECUTE,
        platforms: MAC_LINUX,
        root: Root::Agent,
        conditions: &[eq(&["driver", "protmode", "activeexec"], "0")],
        message: "On Execute Mode is set to PASSIVE. Change this in 'Advance Settings > File and Process Scan'",
        title: "Passive On-Execute Mode",
        description: "\
In passive mode a file is allowed to run while the cloud lookup is still pending, so
a first-seen malicious binary gets to execute.",
    },
    RuleSpec {
        id: ids::RULE_SCAN_CLAMAV_DISABLED,
        platforms: MAC_LINUX,
        root: Root::Agent,
        conditions: &[eq(&["scansettings", "clamav", "enable"], "0")],
        message: "CLAMAV engine is disabled. Change this in 'Advance Settings > ClamAV'",
        title: "ClamAV Disabled",
        description: "The offline ClamAV engine is off.",
    },
    // Every platform
    RuleSpec {
        id: ids::RULE_NFM_DISABLED,
        platforms: ALL,
        root: Root::Agent,
        conditions: &[eq(&["nfm", "enable"], "0")],
        message: "Network/Device Flow Monitoring is disabled. Change this in 'Advance Settings > Network'",
        title: "Device Flow Monitoring Disabled",
        description: "Outbound connections are not matched against IP block lists.",
    },
    RuleSpec {
        id: ids::RULE_NFM_AUDIT_MODE,
        platforms: ALL,
        root: Root::Agent,
        conditions: &[
            eq(&["nfm", "enable"], "1"),
            eq(&["nfm", "settings", "qaction"], "0"),
        ],
        message: "Network/Device Flow Monitoring is ENABLED but set AUDIT. Change this in 'Advance Settings > Network'",
        title: "Device Flow Monitoring in Audit Mode",
        description: "Connections to blocked addresses are logged but allowed.",
    },
    RuleSpec {
        id: ids::RULE_CMDLINE_CAPTURE_DISABLED,
        platforms: ALL,
        root: Root::Agent,
        conditions: &[eq(&["cmdlinecapture", "enable"], "0")],
        message: "Command line capture is disabled. Change this in 'Advance Settings > Administrative Feature > Command Line Capture'",
        title: "Command Line Capture Disabled",
        description: "Process command lines are not recorded in device trajectory.",
    },
    // Client user interface
    RuleSpec {
        id: ids::RULE_UI_EXCLUSIONS_VISIBLE,
        platforms: MAC_WINDOWS,
        root: Root::Config,
        conditions: &[eq(&["ui", "exclusions", "display"], "1")],
        message: "EXCLUSIONS are shown to users via GUI. Change this in 'Advance Settings > Client User Interface'",
        title: "Exclusions Visible in Client UI",
        description: UI_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_UI_CLOUD_TOAST,
        platforms: MAC_WINDOWS,
        root: Root::Config,
        conditions: &[eq(&["ui", "notification", "cloud"], "1")],
        message: "CLOUD notification are shown to users via GUI. Change this in 'Advance Settings > Client User Interface'",
        title: "Cloud Notifications Shown",
        description: UI_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_UI_FILE_TOAST,
        platforms: MAC_WINDOWS,
        root: Root::Config,
        conditions: &[eq(&["ui", "notification", "hide_file_toast"], "0")],
        message: "FILE notification are shown to users via GUI. Change this in 'Advance Settings > Client User Interface'",
        title: "File Notifications Shown",
        description: UI_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_UI_NFM_TOAST,
        platforms: MAC_WINDOWS,
        root: Root::Config,
        conditions: &[eq(&["ui", "notification", "hide_nfm_toast"], "0")],
        message: "NETWORK FLOW notification are shown to users via GUI. Change this in 'Advance Settings > Client User Interface'",
        title: "Network Flow Notifications Shown",
        description: UI_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_UI_VERBOSE,
        platforms: MAC_WINDOWS,
        root: Root::Config,
        conditions: &[eq(&["ui", "notification", "verbose"], "1")],
        message: "VERBOSE logs are shown to users via GUI. Change this in 'Advance Settings > Client User Interface'",
        title: "Verbose Notifications Shown",
        description: UI_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_UI_IOC_TOAST,
        platforms: WINDOWS,
        root: Root::Config,
        conditions: &[eq(&["ui", "notification", "hide_ioc_toast"], "0")],
        message: "IOC logs are shown to users via GUI. Change this in 'Advance Settings > Client User Interface'",
        title: "IOC Notifications Shown",
        description: UI_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_UI_DETECTION_TOAST,
        platforms: WINDOWS,
        root: Root::Config,
        conditions: &[eq(&["ui", "notification", "hide_detection_toast"], "0")],
        message: "DETECTION logs are shown to users via GUI. Change this in 'Advance Settings > Client User Interface'",
        title: "Detection Notifications Shown",
        description: UI_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_UI_HEURISTIC_TOAST,
        platforms: WINDOWS,
        root: Root::Config,
        conditions: &[eq(&["ui", "notification", "hide_heuristic_toast"], "0")],
        message: "HEURISTIC logs are shown to users via GUI. Change this in 'Advance Settings > Client User Interface'",
        title: "Heuristic Notifications Shown",
        description: UI_DESCRIPTION,
    },
    RuleSpec {
        id: ids::RULE_UI_EXPREV_TOAST,
        platforms: WINDOWS,
        root: Root::Config,
        conditions: &[eq(&["ui", "notification", "hide_exprev_toast"], "0")],
        message: "EXPLOIT PREVENTION logs are shown to users via GUI. Change this in 'Advance Settings > Client User Interface'",
        title: "Exploit Prevention Notifications Shown",
        description: UI_DESCRIPTION,
    },
];

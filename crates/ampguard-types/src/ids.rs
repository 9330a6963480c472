//! Stable identifiers for rules.
//!
//! `rule_id` is a dotted namespace: `<feature>.<condition>`.

// Administrative features
pub const RULE_CONTROL_PASSWORD_PROTECTION: &str = "control.password_protection";

// Cloud lookup cache
pub const RULE_CLOUD_TTL_UNKNOWN: &str = "cloud.ttl_unknown";
pub const RULE_CLOUD_TTL_CLEAN: &str = "cloud.ttl_clean";
pub const RULE_CLOUD_TTL_MALICIOUS: &str = "cloud.ttl_malicious";
pub const RULE_CLOUD_TTL_UNSEEN: &str = "cloud.ttl_unseen";
pub const RULE_CLOUD_TTL_BLOCK: &str = "cloud.ttl_block";

// Behavioral protection
pub const RULE_APDE_DISABLED: &str = "apde.disabled";
pub const RULE_APDE_AUDIT_MODE: &str = "apde.audit_mode";

// File system driver
pub const RULE_DRIVER_FILE_AUDIT_MODE: &str = "driver.file_audit_mode";
pub const RULE_DRIVER_FILE_BLOCKING_AUDIT_MODE: &str = "driver.file_blocking_audit_mode";
pub const RULE_DRIVER_FILE_MONITORING_DISABLED: &str = "driver.file_monitoring_disabled";
pub const RULE_DRIVER_PROCESS_MONITORING_DISABLED: &str = "driver.process_monitoring_disabled";
pub const RULE_DRIVER_SPP_AUDIT_MODE: &str = "driver.spp_audit_mode";
pub const RULE_DRIVER_SPP_DISABLED: &str = "driver.spp_disabled";
pub const RULE_DRIVER_PASSIVE_ON_EXECUTE: &str = "driver.passive_on_execute";

// Endpoint isolation
pub const RULE_ISOLATION_DISABLED: &str = "isolation.disabled";
pub const RULE_ISOLATION_PROXY_ALLOWED: &str = "isolation.proxy_allowed";
pub const RULE_ISOLATION_PROXY_BLOCKED: &str = "isolation.proxy_blocked";

// Orbital telemetry
pub const RULE_ORBITAL_DISABLED: &str = "orbital.disabled";

// Scan engines
pub const RULE_SCAN_ETHOS_DISABLED: &str = "scan.ethos_disabled";
pub const RULE_SCAN_ETHOS_COPY_MOVE_DISABLED: &str = "scan.ethos_copy_move_disabled";
pub const RULE_SCAN_NETWORK_DRIVES_UNMONITORED: &str = "scan.network_drives_unmonitored";
pub const RULE_SCAN_SPERO_DISABLED: &str = "scan.spero_disabled";
pub const RULE_SCAN_TETRA_DISABLED: &str = "scan.tetra_disabled";
pub const RULE_SCAN_TETRA_ARCHIVES_DISABLED: &str = "scan.tetra_archives_disabled";
pub const RULE_SCAN_TETRA_PACKED_DISABLED: &str = "scan.tetra_packed_disabled";
pub const RULE_SCAN_TETRA_DEEPSCAN_DISABLED: &str = "scan.tetra_deepscan_disabled";
pub const RULE_SCAN_CLAMAV_DISABLED: &str = "scan.clamav_disabled";

// Malicious activity protection
pub const RULE_HEURISTIC_DISABLED: &str = "heuristic.disabled";
pub const RULE_HEURISTIC_AUDIT_MODE: &str = "heuristic.audit_mode";
pub const RULE_HEURISTIC_QUARANTINE_MODE: &str = "heuristic.quarantine_mode";

// Exploit prevention
pub const RULE_EXPREV_DISABLED: &str = "exprev.disabled";
pub const RULE_EXPREV_AUDIT_MODE: &str = "exprev.audit_mode";

// Script protection
pub const RULE_AMSI_DISABLED: &str = "amsi.disabled";
pub const RULE_AMSI_AUDIT_MODE: &str = "amsi.audit_mode";

// Network flow monitoring
pub const RULE_NFM_DISABLED: &str = "nfm.disabled";
pub const RULE_NFM_AUDIT_MODE: &str = "nfm.audit_mode";

// Command line capture
pub const RULE_CMDLINE_CAPTURE_DISABLED: &str = "cmdline.capture_disabled";

// Client user interface
pub const RULE_UI_EXCLUSIONS_VISIBLE: &str = "ui.exclusions_visible";
pub const RULE_UI_CLOUD_TOAST: &str = "ui.cloud_toast";
pub const RULE_UI_FILE_TOAST: &str = "ui.file_toast";
pub const RULE_UI_NFM_TOAST: &str = "ui.nfm_toast";
pub const RULE_UI_VERBOSE: &str = "ui.verbose";
pub const RULE_UI_IOC_TOAST: &str = "ui.ioc_toast";
pub const RULE_UI_DETECTION_TOAST: &str = "ui.detection_toast";
pub const RULE_UI_HEURISTIC_TOAST: &str = "ui.heuristic_toast";
pub const RULE_UI_EXPREV_TOAST: &str = "ui.exprev_toast";

// Header and exclusion reports (not part of the rule table)
pub const RULE_HEADER_LAST_CHANGE: &str = "header.last_change";
pub const RULE_EXCLUSIONS_WILDCARD_FILE: &str = "exclusions.wildcard_file";
pub const RULE_EXCLUSIONS_WILDCARD_CERT_ISSUER: &str = "exclusions.wildcard_cert_issuer";
pub const RULE_EXCLUSIONS_WILDCARD_PROCESS: &str = "exclusions.wildcard_process";


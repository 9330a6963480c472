#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Completed,
    Aborted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableHeader {
    pub name: Option<String>,
    pub uuid: Option<String>,
    pub serial_number: Option<String>,
    pub business_uuid: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableExclusion {
    pub value: String,
    pub wildcard: bool,
}

/// One kind of exclusion. `entries: None` means the kind is not defined in the policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableExclusionGroup {
    /// `File`, `Certificate` or `Process`.
    pub kind: String,
    /// Noun used when the kind is not defined (`path`, `certificate issuer`, `process`).
    pub undefined_label: String,
    pub entries: Option<Vec<RenderableExclusion>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: String,
    pub rule_id: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub source: String,
    pub platform: Option<String>,
    pub platform_overridden: bool,
    pub status: RenderableStatus,
    pub abort_reason: Option<String>,
    pub header: Option<RenderableHeader>,
    /// Rendered after the header; `None` when the policy has no exclusions block.
    pub exclusions: Option<Vec<RenderableExclusionGroup>>,
    /// Wildcard entries across all exclusion kinds.
    pub wildcards_total: usize,
    /// All findings, in audit order.
    pub findings: Vec<RenderableFinding>,
    pub findings_total: u32,
}

// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Debug;
use std::io::Write;

use crate::checks::eval::ComplianceVerdict;
use crate::checks::Result;

#[derive(Copy, Eq, Clone, Debug, PartialEq)]
pub enum OutputFormatType {
    SingleLineSummary,
    JSON,
    YAML,
}

/// Thin seam over the verdict sink. Implementations only turn a verdict into
/// observable output; retry or delivery guarantees belong to the sink itself.
pub trait Reporter: Debug {
    fn report(&self, writer: &mut dyn Write, verdict: &ComplianceVerdict) -> Result<()>;
}

/// One summary line per verdict. Non-compliant resources get an additional
/// violation line naming the exact missing keys, suitable for alerting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SummaryReporter {}

impl SummaryReporter {
    pub fn new() -> Self {
        SummaryReporter {}
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        SummaryReporter::new()
    }
}

impl Reporter for SummaryReporter {
    fn report(&self, writer: &mut dyn Write, verdict: &ComplianceVerdict) -> Result<()> {
        writeln!(
            writer,
            "{} Name: {} | Asset Type: {} | Parent: {} | Labels count: {}",
            verdict.status(),
            verdict.resource_name,
            verdict.asset_type,
            verdict.parent,
            verdict.label_count
        )?;
        if !verdict.compliant {
            writeln!(
                writer,
                "Resource with missing label - Name: {} | Asset Type: {} | Parent: {} | Missing keys: [{}]",
                verdict.resource_name,
                verdict.asset_type,
                verdict.parent,
                verdict.missing_keys.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Machine-readable rendering of the verdict record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StructuredReporter {
    output: OutputFormatType,
}

impl StructuredReporter {
    pub fn new(output: OutputFormatType) -> Self {
        StructuredReporter { output }
    }
}

impl Reporter for StructuredReporter {
    fn report(&self, writer: &mut dyn Write, verdict: &ComplianceVerdict) -> Result<()> {
        match self.output {
            OutputFormatType::JSON => {
                writeln!(writer, "{}", serde_json::to_string_pretty(verdict)?)?
            }
            OutputFormatType::YAML => write!(writer, "{}", serde_yaml::to_string(verdict)?)?,
            OutputFormatType::SingleLineSummary => {
                SummaryReporter::new().report(writer, verdict)?
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;

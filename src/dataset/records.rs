// src/dataset/records.rs
// Literal rows of the static strategy dataset.
use super::{
    AiFeature, Competitor, GapPriority, GrowthHeadline, InsightImpact, InsightStatus, KeyMetric, MarketGap,
    MarketGrowth, PilotPhase, RevenueStream, SalesPhase, StrategicInsight, TargetCompany, TargetSegment,
};

pub(super) fn competitors() -> Vec<Competitor> {
    [
        ("Kinaxis", "Large Enterprise", 9, 9, 2, 1, 8),
        ("SAP B1/SCM", "Mid + Large", 10, 9, 2, 3, 7),
        ("Infor GT Nexus", "Enterprise", 8, 7, 3, 2, 8),
        ("Manhattan", "Enterprise Retail", 8, 8, 2, 2, 7),
        ("Blue Yonder", "Enterprise", 9, 9, 2, 1, 8),
        ("o9 Solutions", "Enterprise", 8, 9, 2, 1, 9),
        ("FourKites", "Enterprise", 6, 7, 5, 4, 6),
        ("Project44", "Enterprise", 6, 7, 5, 4, 6),
        ("Bizongo", "India SME/Mid", 5, 5, 7, 8, 5),
    ]
    .into_iter()
    .map(|(vendor, segment, coverage, ai, cost, sme_access, opportunity)| Competitor {
        vendor: vendor.to_string(),
        segment: segment.to_string(),
        coverage,
        ai,
        cost,
        sme_access,
        opportunity,
    })
    .collect()
}

pub(super) fn market_gaps() -> Vec<MarketGap> {
    use GapPriority::*;
    [
        ("SME fragmentation", Critical, 9, 8, "Removes tool sprawl"),
        ("Enterprise complexity", High, 8, 7, "Faster adoption"),
        ("Weak India localization", Critical, 10, 9, "Regulatory fit"),
        ("Excel planning", High, 8, 8, "Better decisions"),
        ("Manual vendor mgmt", Medium, 7, 7, "Performance visibility"),
        ("No cross-module sync", High, 8, 6, "Dept alignment"),
        ("Static dashboards", Medium, 7, 8, "Real-time ops view"),
        ("High license cost", Critical, 9, 9, "Lower entry barrier"),
        ("No SME AI", Critical, 10, 7, "Decision intelligence"),
    ]
    .into_iter()
    .map(|(gap, priority, impact, ease, value)| MarketGap::new(gap, priority, impact, ease, value))
    .collect()
}

pub(super) fn ai_features() -> Vec<AiFeature> {
    [
        ("Inventory AI Copilot", 9, 3, 7, 9),
        ("Demand Forecast AI", 7, 8, 8, 8),
        ("AI Reorder Engine", 8, 5, 7, 9),
        ("Supplier AI Scoring", 8, 4, 6, 7),
        ("Conversational Copilot", 9, 2, 6, 8),
        ("Anomaly Detection", 7, 6, 8, 8),
        ("Scenario Simulation", 8, 7, 5, 7),
        ("Document AI", 9, 4, 9, 10),
        ("Redistribution AI", 9, 3, 6, 8),
    ]
    .into_iter()
    .map(|(feature, sme_diff, enterprise_has, implementation, roi)| AiFeature {
        feature: feature.to_string(),
        sme_diff,
        enterprise_has,
        implementation,
        roi,
    })
    .collect()
}

pub(super) fn target_segments() -> Vec<TargetSegment> {
    [
        (
            "Industrial SMEs (Peenya)",
            10,
            850,
            15000,
            35,
            "Stockouts/overstock, Manual PO/GRN, Invoice mismatches",
            "Inventory, PO/GRN, WMS-lite, Transport, Document AI",
        ),
        (
            "Distributors/Wholesalers",
            9,
            620,
            18000,
            30,
            "Order-to-cash gaps, Delivery failures, Excel planning",
            "Order Mgmt, Inventory, Route/Dispatch, Control Tower, CRM",
        ),
        (
            "D2C/E-commerce",
            8,
            480,
            12000,
            40,
            "Forecasting, Inventory sync, Shipment SLA tracking",
            "Inventory, Sales channels, Forecasting, Control Tower",
        ),
        (
            "3PLs/Transport",
            7,
            340,
            20000,
            25,
            "Shipment tracking, Delay prediction, Billing disputes",
            "Transport, Tracking, Control Tower, Invoice/Claims",
        ),
    ]
    .into_iter()
    .map(|(name, priority, market_size, avg_deal, conversion_rate, pain_points, modules)| TargetSegment {
        name: name.to_string(),
        priority,
        market_size,
        avg_deal,
        conversion_rate,
        pain_points: pain_points.to_string(),
        modules: modules.to_string(),
    })
    .collect()
}

pub(super) fn revenue_streams() -> Vec<RevenueStream> {
    [
        ("Core subscription", "SME + Mid", 100, 85, 9),
        ("Seat-based", "Mid-market teams", 100, 88, 8),
        ("Usage-based AI", "SMEs wanting ROI", 80, 75, 10),
        ("Transaction-based logistics", "Distributors + fleets", 70, 65, 9),
        ("Implementation", "Mid-market", 0, 40, 5),
        ("Integration marketplace", "All", 90, 95, 10),
        ("Premium support/SLA", "Mid-market", 100, 90, 7),
    ]
    .into_iter()
    .map(|(stream, segment, recurring, margin, scalability)| {
        RevenueStream::new(stream, segment, recurring, margin, scalability)
    })
    .collect()
}

pub(super) fn market_growth() -> Vec<MarketGrowth> {
    [
        (2024, 215.0, 8.2, 1.4),
        (2025, 245.0, 9.1, 1.6),
        (2026, 280.0, 10.2, 1.9),
        (2027, 320.0, 11.5, 2.2),
        (2028, 365.0, 13.0, 2.6),
        (2029, 415.0, 14.8, 3.1),
        (2030, 475.0, 16.9, 3.7),
    ]
    .into_iter()
    .map(|(year, logistics, warehouse, wms)| MarketGrowth { year, logistics, warehouse, wms })
    .collect()
}

pub(super) fn strategic_insights() -> Vec<StrategicInsight> {
    use InsightImpact::*;
    use InsightStatus::*;
    [
        ("Positioning", "Stay SME-first and avoid enterprise feature overload", Critical, High),
        ("Moat", "Embedded AI + Workflow + Localization combined", Strength, High),
        ("Wedge Market", "India compliance + GST + e-invoice integration", Opportunity, High),
        ("Narrative", "Control Tower + Copilot fusion central in pitch", Strength, Medium),
        ("Competition", "Compete on speed + usability + cost, NOT features", Critical, High),
        ("Pricing", "Modular pricing aligns with SME buying behavior", Strength, High),
        ("Quick Win", "Document AI + auto data ingestion high ROI", Opportunity, High),
        ("Differentiator", "Conversational SCM layer strong demo tool", Strength, Medium),
        ("Risk", "Scope creep - ship core execution first, AI second", Warning, High),
        ("GTM", "Target multi-warehouse SMEs and distributors first", Opportunity, High),
    ]
    .into_iter()
    .map(|(category, insight, status, impact)| StrategicInsight {
        category: category.to_string(),
        insight: insight.to_string(),
        status,
        impact,
    })
    .collect()
}

pub(super) fn key_metrics() -> Vec<KeyMetric> {
    [
        ("Market Size (2027)", "₹320B", "↑ 48% growth"),
        ("Target Companies", "2,290", "Bangalore region"),
        ("Avg Deal Size", "₹15-20K", "Monthly recurring"),
        ("AI Features", "9", "Differentiators"),
    ]
    .into_iter()
    .map(|(label, value, delta)| KeyMetric {
        label: label.to_string(),
        value: value.to_string(),
        delta: delta.to_string(),
    })
    .collect()
}

pub(super) fn growth_headlines() -> Vec<GrowthHeadline> {
    [
        ("Logistics Market (2030)", "₹475B", "+121% (2024-2030)", 14.2),
        ("Warehouse Market (2030)", "₹16.9B", "+106% (2024-2030)", 12.8),
        ("WMS Market (2030)", "₹3.7B", "+164% (2024-2030)", 17.5),
    ]
    .into_iter()
    .map(|(label, value, delta, cagr_percent)| GrowthHeadline {
        label: label.to_string(),
        value: value.to_string(),
        delta: delta.to_string(),
        cagr_percent,
    })
    .collect()
}

pub(super) fn pilot_phases() -> Vec<PilotPhase> {
    [
        (
            "Week 1-2",
            "Baseline Mapping",
            "Current tools assessment, SKU count, warehouse locations, order volume analysis",
        ),
        (
            "Week 3-4",
            "Core Module Go-Live",
            "Inventory + PO/GRN live, document AI ingestion, minimum integrations",
        ),
        (
            "Week 5-8",
            "Execution Layer",
            "Order + dispatch tracking, control tower activation, alerting setup",
        ),
        (
            "Week 9-12",
            "Intelligence Layer",
            "Forecasting + reorder suggestions, KPI review, case study documentation",
        ),
    ]
    .into_iter()
    .map(|(week, title, description)| PilotPhase {
        week: week.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub(super) fn sales_phases() -> Vec<SalesPhase> {
    [
        (
            "Phase 1",
            "0-6 months",
            "Founder-led sales + 5-10 design partners, weekly on-site mapping, fast templates",
        ),
        (
            "Phase 2",
            "6-18 months",
            "Inside sales + channel partners (accounting firms, logistics aggregators, ERP implementers)",
        ),
        (
            "Phase 3",
            "18+ months",
            "Platform ecosystem (3PL connectors, GST/e-invoice integrations, marketplace add-ons)",
        ),
    ]
    .into_iter()
    .map(|(phase, window, motion)| SalesPhase {
        phase: phase.to_string(),
        window: window.to_string(),
        motion: motion.to_string(),
    })
    .collect()
}

pub(super) fn target_companies() -> Vec<TargetCompany> {
    [
        ("Max Milan Tooling (Peenya)", "Industrial tooling, SKU/vendor complexity"),
        ("Axis Electric Corporation (Peenya)", "Component supply, frequent PO cycles"),
        ("Udaan (Bengaluru HQ)", "B2B trade platform, integration benchmark"),
        ("MTR Foods (Bengaluru)", "Complex supply chain, enterprise reference"),
    ]
    .into_iter()
    .map(|(name, profile)| TargetCompany {
        name: name.to_string(),
        profile: profile.to_string(),
    })
    .collect()
}

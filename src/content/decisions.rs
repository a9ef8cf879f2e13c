//! Built-in decision templates

use crate::config::{Decision, DecisionCategory, DecisionOption, EffectField, Effects, Requirements};
use crate::model::{LegalForm, Stage};

use crate::config::EffectField::*;

struct OptionSpec<'a> {
    id: &'a str,
    text: &'a str,
    cost: i64,
    months: u32,
    effects: &'a [(EffectField, i64)],
    benefits: &'a [&'a str],
    risks: &'a [&'a str],
}

impl OptionSpec<'_> {
    fn build(&self) -> DecisionOption {
        DecisionOption {
            id: self.id.to_string(),
            text: self.text.to_string(),
            cost: self.cost,
            time_required: self.months,
            requirements: None,
            effects: self
                .effects
                .iter()
                .fold(Effects::new(), |acc, &(field, delta)| acc.with(field, delta)),
            risks: self.risks.iter().map(|s| s.to_string()).collect(),
            benefits: self.benefits.iter().map(|s| s.to_string()).collect(),
            legal_form: None,
        }
    }
}

fn decision(
    id: &str,
    title: &str,
    description: &str,
    category: DecisionCategory,
    stage: Stage,
    options: Vec<DecisionOption>,
) -> Decision {
    Decision {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        stage,
        options,
        time_limit: None,
        consequences: None,
    }
}

/// Founding a legal entity establishes the matching legal form
fn legal(option: DecisionOption, form: LegalForm) -> DecisionOption {
    DecisionOption {
        legal_form: Some(form),
        ..option
    }
}

pub(super) fn startup_decisions() -> Vec<Decision> {
    vec![
        decision(
            "business-idea",
            "Define the business idea",
            "You have an idea for a digital product. How do you proceed?",
            DecisionCategory::Product,
            Stage::Idea,
            vec![
                OptionSpec {
                    id: "market-research",
                    text: "Run thorough market research",
                    cost: 2_000,
                    months: 2,
                    effects: &[(Cash, -2_000), (MarketValidation, 30), (Stress, 10)],
                    benefits: &["Solid market knowledge", "Reduced risk"],
                    risks: &["High upfront cost", "Lost time"],
                }
                .build(),
                OptionSpec {
                    id: "quick-prototype",
                    text: "Build a quick prototype",
                    cost: 500,
                    months: 1,
                    effects: &[(Cash, -500), (ProductDevelopment, 20), (Energy, -15)],
                    benefits: &["Fast start", "Early learnings"],
                    risks: &["Unvalidated assumptions", "Possible wrong turns"],
                }
                .build(),
                OptionSpec {
                    id: "lean-approach",
                    text: "Apply the lean startup method",
                    cost: 1_000,
                    months: 1,
                    effects: &[(Cash, -1_000), (MarketValidation, 15), (ProductDevelopment, 15)],
                    benefits: &["Balanced approach", "Iterative development"],
                    risks: &["Medium pace"],
                }
                .build(),
            ],
        ),
        decision(
            "legal-form",
            "Choose a legal form",
            "Your startup is taking shape. Which legal form do you choose?",
            DecisionCategory::Legal,
            Stage::Validation,
            vec![
                legal(
                    OptionSpec {
                        id: "einzelunternehmen",
                        text: "Register a sole proprietorship",
                        cost: 200,
                        months: 1,
                        effects: &[(Cash, -200), (MonthlyBurn, 50)],
                        benefits: &["Simple setup", "Low cost", "Full control"],
                        risks: &["Unlimited liability", "Hard to raise investment"],
                    }
                    .build(),
                    LegalForm::Einzelunternehmen,
                ),
                legal(
                    OptionSpec {
                        id: "ug",
                        text: "Found a UG (limited liability)",
                        cost: 1_000,
                        months: 2,
                        effects: &[(Cash, -1_000), (MonthlyBurn, 200)],
                        benefits: &["Limited liability", "Professional appearance"],
                        risks: &["Higher founding cost", "More paperwork"],
                    }
                    .build(),
                    LegalForm::Ug,
                ),
                legal(
                    DecisionOption {
                        requirements: Some(Requirements {
                            cash: Some(25_000),
                            ..Requirements::default()
                        }),
                        ..OptionSpec {
                            id: "gmbh",
                            text: "Found a GmbH",
                            cost: 25_000,
                            months: 3,
                            effects: &[(Cash, -25_000), (MonthlyBurn, 300), (BrandAwareness, 10)],
                            benefits: &["High credibility", "Investor friendly"],
                            risks: &["High share capital requirement", "Complex administration"],
                        }
                        .build()
                    },
                    LegalForm::Gmbh,
                ),
            ],
        ),
        decision(
            "mvp-development",
            "Build the MVP",
            "Time for your minimum viable product. How do you build it?",
            DecisionCategory::Product,
            Stage::Mvp,
            vec![
                OptionSpec {
                    id: "self-develop",
                    text: "Code it yourself",
                    cost: 2_000,
                    months: 4,
                    effects: &[(Cash, -2_000), (ProductDevelopment, 40), (Energy, -30), (Stress, 20)],
                    benefits: &["Full control", "Deep product understanding"],
                    risks: &["Large time investment", "Possible technical debt"],
                }
                .build(),
                OptionSpec {
                    id: "hire-freelancer",
                    text: "Hire a freelancer",
                    cost: 8_000,
                    months: 2,
                    effects: &[(Cash, -8_000), (ProductDevelopment, 35), (Stress, 10)],
                    benefits: &["Professional development", "Saves time"],
                    risks: &["High cost", "Less control"],
                }
                .build(),
                OptionSpec {
                    id: "no-code",
                    text: "Use a no-code platform",
                    cost: 500,
                    months: 1,
                    effects: &[(Cash, -500), (ProductDevelopment, 25), (MonthlyBurn, 100)],
                    benefits: &["Quick to build", "Low cost"],
                    risks: &["Limited functionality", "Platform lock-in"],
                }
                .build(),
            ],
        ),
        decision(
            "marketing-strategy",
            "Marketing strategy",
            "Your product is ready. How do you bring it to market?",
            DecisionCategory::Marketing,
            Stage::Launch,
            vec![
                OptionSpec {
                    id: "social-media",
                    text: "Social media marketing",
                    cost: 3_000,
                    months: 2,
                    effects: &[(Cash, -3_000), (BrandAwareness, 25), (Customers, 100), (MonthlyBurn, 500)],
                    benefits: &["Direct customer contact", "Viral potential"],
                    risks: &["Unpredictable reach", "Time consuming"],
                }
                .build(),
                OptionSpec {
                    id: "content-marketing",
                    text: "Content marketing and SEO",
                    cost: 2_000,
                    months: 3,
                    effects: &[(Cash, -2_000), (BrandAwareness, 20), (Customers, 150), (MonthlyRevenue, 200)],
                    benefits: &["Lasting visibility", "Builds expertise"],
                    risks: &["Slow results", "Ongoing effort"],
                }
                .build(),
                OptionSpec {
                    id: "paid-ads",
                    text: "Google and Facebook ads",
                    cost: 5_000,
                    months: 1,
                    effects: &[(Cash, -5_000), (BrandAwareness, 15), (Customers, 200), (MonthlyBurn, 1_000)],
                    benefits: &["Fast results", "Measurable performance"],
                    risks: &["High running cost", "Platform dependency"],
                }
                .build(),
            ],
        ),
        decision(
            "first-hire",
            "First hire",
            "You need help. Who do you hire first?",
            DecisionCategory::Hiring,
            Stage::Growth,
            vec![
                OptionSpec {
                    id: "developer",
                    text: "Hire a developer",
                    cost: 4_000,
                    months: 2,
                    effects: &[(Cash, -4_000), (Employees, 1), (MonthlyBurn, 4_500), (ProductDevelopment, 20)],
                    benefits: &["Faster product development", "Technical expertise"],
                    risks: &["High payroll", "Management responsibility"],
                }
                .build(),
                OptionSpec {
                    id: "marketing-manager",
                    text: "Hire a marketing manager",
                    cost: 3_500,
                    months: 2,
                    effects: &[
                        (Cash, -3_500),
                        (Employees, 1),
                        (MonthlyBurn, 4_000),
                        (BrandAwareness, 15),
                        (Customers, 50),
                    ],
                    benefits: &["Professional marketing", "Customer acquisition"],
                    risks: &["High payroll", "Uncertain return"],
                }
                .build(),
                OptionSpec {
                    id: "virtual-assistant",
                    text: "Virtual assistant",
                    cost: 1_000,
                    months: 1,
                    effects: &[(Cash, -1_000), (MonthlyBurn, 800), (Energy, 10), (Stress, -10)],
                    benefits: &["Relief from admin work", "Flexible cost"],
                    risks: &["Limited skills", "Communication overhead"],
                }
                .build(),
            ],
        ),
        decision(
            "funding-round",
            "Funding round",
            "You need more capital. Which kind of funding do you pick?",
            DecisionCategory::Funding,
            Stage::Growth,
            vec![
                OptionSpec {
                    id: "bootstrapping",
                    text: "Keep bootstrapping",
                    cost: 0,
                    months: 1,
                    effects: &[(Stress, 15), (Energy, -10)],
                    benefits: &["Full control", "No dilution"],
                    risks: &["Limited growth", "High stress"],
                }
                .build(),
                OptionSpec {
                    id: "business-angel",
                    text: "Look for a business angel",
                    cost: 2_000,
                    months: 3,
                    // 50k raised minus 2k in costs
                    effects: &[(Cash, 48_000), (MonthlyBurn, 100), (BrandAwareness, 10)],
                    benefits: &["Capital plus expertise", "Network access"],
                    risks: &["Equity loss", "Investor say in decisions"],
                }
                .build(),
                OptionSpec {
                    id: "bank-loan",
                    text: "Apply for a bank loan",
                    cost: 1_000,
                    months: 2,
                    // 25k loan minus 1k in fees
                    effects: &[(Cash, 24_000), (MonthlyBurn, 500)],
                    benefits: &["No dilution", "Predictable cost"],
                    risks: &["Personal liability", "Interest payments"],
                }
                .build(),
            ],
        ),
    ]
}

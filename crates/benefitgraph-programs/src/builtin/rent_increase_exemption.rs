use benefitgraph_core::Household;
use benefitgraph_eval::{Aggregate, EligibilityGraph, Expr, Subject, SINK, SOURCE};

use crate::program::Program;

const DESCRIPTION: &str = "\
To be eligible for DRIE, you should be able to answer \"yes\" to all of these questions:
1. Are you 18 years old or older?
2. Is your name on the lease?
3. Is your combined household income $50,000 or less in a year?
4. Do you spend more than one-third of your monthly income on rent?
5. Do you live in NYC in one of these types of housing: a rent stabilized apartment, a rent controlled apartment, a Mitchell-Lama development, a Limited Dividend development, a redevelopment company development, a Housing Development Fund Company (HDFC) Cooperative development, a Section 213 Cooperative unit, or a rent regulated hotel or single room occupancy unit?
6. Do you have income from the following benefits: Supplemental Security Income (SSI), Federal Social Security Disability Insurance (SSDI), U.S. Department of Veterans Affairs (VA) disability pension or compensation, or disability-related Medicaid if you received either SSI or SSDI in the past?";

const HOUSING_FLAGS: [&str; 9] = [
    "lives_in_rent_stabilized_apartment",
    "lives_in_rent_controlled_apartment",
    "lives_in_mitchell_lama",
    "lives_in_limited_dividend_development",
    "lives_in_redevelopment_company_development",
    "lives_in_hdfc_development",
    "lives_in_section_213_coop",
    "lives_in_rent_regulated_hotel",
    "lives_in_rent_regulated_single",
];

/// Disability Rent Increase Exemption: a chain of user requirements ending in
/// alternative housing types and alternative disability benefits.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabilityRentIncreaseExemption;

impl Program for DisabilityRentIncreaseExemption {
    fn name(&self) -> &'static str {
        "DisabilityRentIncreaseExemption"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn build(&self, _household: &Household) -> EligibilityGraph {
        let mut g = EligibilityGraph::new();

        g.add_edge(
            SOURCE,
            "drie_adult",
            Expr::ge(Expr::user("age"), Expr::int(18)),
        );
        g.add_edge("drie_adult", "drie_lease", Expr::user("name_is_on_lease"));
        g.add_edge(
            "drie_lease",
            "drie_income",
            Expr::le(Expr::aggregate(Aggregate::HhTotalIncome), Expr::int(50_000)),
        );
        // rent > (income / 12) / 3, kept in integers
        g.add_edge(
            "drie_income",
            "drie_rent_burden",
            Expr::gt(
                Expr::int(36) * Expr::user("monthly_rent_spending"),
                Expr::total_income(Subject::USER),
            ),
        );
        g.add_edge(
            "drie_rent_burden",
            "drie_nyc",
            Expr::eq(Expr::user("place_of_residence"), Expr::str("NYC")),
        );
        for flag in HOUSING_FLAGS {
            g.add_edge("drie_nyc", "drie_housing", Expr::user(flag));
        }

        g.add_edge("drie_housing", SINK, Expr::user("receives_ssi"));
        g.add_edge("drie_housing", SINK, Expr::user("receives_ssdi"));
        g.add_edge("drie_housing", SINK, Expr::user("receives_va_disability"));
        g.add_edge(
            "drie_housing",
            "drie_medicaid",
            Expr::user("receives_disability_medicaid"),
        );
        g.add_edge("drie_medicaid", SINK, Expr::user("has_received_ssi_or_ssdi"));
        g
    }
}

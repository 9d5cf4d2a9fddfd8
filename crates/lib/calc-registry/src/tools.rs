use crate::models::{ToolDescriptor, ToolIcon};

/// Calculator tools in display order.
pub const CALCULATOR_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        id: "age-calculator",
        title: "Age Calculator",
        description: "Calculate age from date of birth",
        path: "/tools/calculators/age-calculator",
        icon: ToolIcon::Calendar,
    },
    ToolDescriptor {
        id: "percentage-calculator",
        title: "Percentage Calculator",
        description: "Calculate percentages, increases and decreases",
        path: "/tools/calculators/percentage-calculator",
        icon: ToolIcon::Percent,
    },
    ToolDescriptor {
        id: "bmi-calculator",
        title: "BMI Calculator",
        description: "Calculate Body Mass Index",
        path: "/tools/calculators/bmi-calculator",
        icon: ToolIcon::Activity,
    },
    ToolDescriptor {
        id: "loan-calculator",
        title: "Loan Calculator",
        description: "Calculate loan EMI and total interest",
        path: "/tools/calculators/loan-calculator",
        icon: ToolIcon::Landmark,
    },
    ToolDescriptor {
        id: "gst-calculator",
        title: "GST Calculator",
        description: "Calculate Goods and Services Tax",
        path: "/tools/calculators/gst-calculator",
        icon: ToolIcon::Receipt,
    },
    ToolDescriptor {
        id: "calorie-calculator",
        title: "Calorie Calculator",
        description: "Estimate daily calorie needs",
        path: "/tools/calculators/calorie-calculator",
        icon: ToolIcon::Flame,
    },
    ToolDescriptor {
        id: "compound-interest-calculator",
        title: "Compound Interest Calculator",
        description: "Calculate compound interest on investments",
        path: "/tools/calculators/compound-interest-calculator",
        icon: ToolIcon::TrendingUp,
    },
    ToolDescriptor {
        id: "simple-interest-calculator",
        title: "Simple Interest Calculator",
        description: "Calculate simple interest on a principal",
        path: "/tools/calculators/simple-interest-calculator",
        icon: ToolIcon::Coins,
    },
    ToolDescriptor {
        id: "sip-calculator",
        title: "SIP Calculator",
        description: "Estimate returns on systematic investment plans",
        path: "/tools/calculators/sip-calculator",
        icon: ToolIcon::PiggyBank,
    },
    ToolDescriptor {
        id: "discount-calculator",
        title: "Discount Calculator",
        description: "Calculate discounts and final prices",
        path: "/tools/calculators/discount-calculator",
        icon: ToolIcon::Tag,
    },
    ToolDescriptor {
        id: "tip-calculator",
        title: "Tip Calculator",
        description: "Split bills and calculate tips",
        path: "/tools/calculators/tip-calculator",
        icon: ToolIcon::HandCoins,
    },
    ToolDescriptor {
        id: "date-difference-calculator",
        title: "Date Difference Calculator",
        description: "Count the days between two dates",
        path: "/tools/calculators/date-difference-calculator",
        icon: ToolIcon::CalendarRange,
    },
    ToolDescriptor {
        id: "fuel-cost-calculator",
        title: "Fuel Cost Calculator",
        description: "Estimate fuel cost for a trip",
        path: "/tools/calculators/fuel-cost-calculator",
        icon: ToolIcon::Fuel,
    },
    ToolDescriptor {
        id: "mortgage-calculator",
        title: "Mortgage Calculator",
        description: "Calculate monthly mortgage payments",
        path: "/tools/calculators/mortgage-calculator",
        icon: ToolIcon::Home,
    },
    ToolDescriptor {
        id: "income-tax-calculator",
        title: "Income Tax Calculator",
        description: "Estimate income tax liability",
        path: "/tools/calculators/income-tax-calculator",
        icon: ToolIcon::Scale,
    },
    ToolDescriptor {
        id: "scientific-calculator",
        title: "Scientific Calculator",
        description: "Perform advanced mathematical calculations",
        path: "/tools/calculators/scientific-calculator",
        icon: ToolIcon::Calculator,
    },
];

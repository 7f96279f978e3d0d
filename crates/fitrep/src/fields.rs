//! NAVPERS 1610/2 template field names
//!
//! These tag strings and codes must match the FITREP template byte for byte.

/// Plain text fields: (template tag, form key)
pub const TEXT_FIELDS: &[(&str, &str)] = &[
    ("_1_Name_Last__First_MI_Suffix", "rateeName"),
    ("_2_GradeRate", "gradeRate"),
    ("_3_Desig", "desig"),
    ("_4_SSN", "ssn"),
    ("_6_UIC", "uic"),
    ("_7_ShipStation", "shipStation"),
    ("_8_Promotion_Status", "promotionStatus"),
    ("_9_Date_Reported", "dateReported"),
    ("_14_PeriodDate_From", "periodFrom"),
    ("_15_PeriodDate_To", "periodTo"),
    ("_20_Physical_Readiness", "physicalReadiness"),
    ("_21_Billet", "billet"),
    ("_22_Reporting_Senior_Last__FI_MI", "reportingSeniorName"),
    ("_23_Grade_Rpt_Sr", "reportingSeniorGrade"),
    ("_24_Desig_Rpt_Sr", "reportingSeniorDesig"),
    ("_25_Title_Rpt_Sr", "reportingSeniorTitle"),
    ("_26_UIC_Rpt_Sr", "reportingSeniorUIC"),
    ("_28_Command_achievements", "commandEmployment"),
    ("_29_PrimaryCollat", "primaryDuties"),
    ("_30_Date_Counsel", "dateCounseled"),
    ("_31_Counselor", "counselor"),
    ("_32_Ind_Sig_Counseled", "individualSignature"),
    ("_41_Comments_on_Perf", "performanceComments"),
    ("_44_Rpt_Sr_Address", "summarySignProblem"),
    ("_45_Rpt_Sr_Sign_Date", "reportingSeniorSignDate"),
    ("_47_Reg_Rpt_Sr_Sig", "regularReportingSenior"),
    ("_47_Date", "regularReportingSeniorDate"),
];

pub const STATUS_KEY: &str = "status";
pub const STATUS_FIELD: &str = "_5_Status";

/// Duty status: (form value, template code)
pub const STATUS_CODES: &[(&str, &str)] = &[("ACT", "1"), ("FTS", "2"), ("INACT", "3")];

pub const OCCASION_KEY: &str = "occasion";

/// Occasion for report: (form value, template flag)
pub const OCCASION_FLAGS: &[(&str, &str)] = &[
    ("Periodic", "_10_Periodic"),
    ("Detach Individual", "_11_Detach_ind"),
    ("Detach Senior", "_12_Detach_Sr"),
    ("Special", "_13_Special"),
];

pub const NOT_OBSERVED_KEY: &str = "notObserved";
pub const NOT_OBSERVED_FIELD: &str = "_16_NOB";

pub const REPORT_TYPE_KEY: &str = "reportType";

/// Type of report: (form value, template flag)
pub const REPORT_TYPE_FLAGS: &[(&str, &str)] = &[
    ("Regular", "_17_Report_Regular"),
    ("Concurrent", "_18_Report_Concurrent"),
    ("Ops Cdr", "_19_Report_OpsCDR"),
];

/// Performance traits: (form key, template tag)
pub const TRAITS: &[(&str, &str)] = &[
    ("leadership", "_33_Leadership"),
    ("institutionalExpertise", "_34_InstExpertise"),
    ("professionalism", "_35_Professionalism"),
    ("loyalty", "_36_Loyalty"),
    ("character", "_37_Character"),
    ("communication", "_38_Communication"),
    ("heritage", "_39_Heritage"),
];

/// Grade marker for a trait that was not observed
pub const NOT_OBSERVED_GRADE: &str = "NOB";

pub const RECOMMENDATION_KEY: &str = "recommendation";
pub const RECOMMENDATION_FIELD: &str = "_42_Recommendation";

/// Promotion recommendation summary: (form value, template marker)
pub const SUMMARY_MARKERS: &[(&str, &str)] = &[
    ("Significant Problems", "_43_Summary_Sig_Problem"),
    ("Progressing", "_43_Summary_Progressing"),
    ("Promotable", "_43_Summary_Promotable"),
    ("Must Promote", "_43_Summary_Must_Promote"),
    ("Early Promote", "_43_Summary_Early_Promote"),
];

/// Character written into the selected summary marker
pub const SUMMARY_MARK: &str = "X";

pub const TRAIT_AVERAGE_FIELD: &str = "Member_Trait_Avg";

pub const FLAG_SET: &str = "1";
pub const FLAG_CLEAR: &str = "0";

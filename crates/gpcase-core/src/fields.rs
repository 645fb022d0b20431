//! Field name conventions.
//!
//! Clinical field names are carried verbatim as opaque map keys, end to end.
//! These constants define the canonical spelling used by the form store, the
//! validation rules, and the backend payloads.

// Basics (step 1)
pub const SUBJECT: &str = "Subject";
pub const DESCRIPTION: &str = "Description";
/// Collected in the UI but never required. Kept optional on purpose.
pub const PRIORITY: &str = "Priority";

// Presenting (step 2)
pub const PRIMARY_CLINICAL_QUESTION_TYPES: &str = "Primary_Clinical_Question_Types__c";
pub const PRESENTING_CONCERNS: &str = "Presenting_Concerns__c";

// Prior diagnoses / medical flags (step 3)
pub const PRIOR_DIAGNOSES: &str = "Prior_Diagnoses__c";
pub const MEDICAL_FLAGS: &str = "Medical_Flags__c";

// Suicide (step 4)
pub const SUICIDAL_IDEATION: &str = "Suicidal_Ideation__c";
pub const PROTECTIVE_FACTORS: &str = "Protective_Factors__c";
pub const ACCESS_TO_MEANS: &str = "Access_to_Means__c";
pub const PAST_SUICIDE_ATTEMPTS: &str = "Past_Suicide_Attempts__c";

// Violence (step 5)
pub const HOMICIDAL_IDEATION: &str = "Homicidal_Ideation__c";
pub const VIOLENCE_DETAILS: &str = "Violence_Details__c";

// Psychosis / mania (step 6)
pub const PSYCHOSIS_SYMPTOMS: &str = "Psychosis_Symptoms__c";
pub const MANIA_SYMPTOMS: &str = "Mania_Symptoms__c";

// Family history / trauma (step 7)
pub const FAMILY_HISTORY: &str = "Family_Psychiatric_History__c";
pub const FAMILY_HISTORY_NOTES: &str = "Family_History_Notes__c";
pub const TRAUMA_HISTORY: &str = "Trauma_History__c";

// Home safety (step 8)
pub const HOME_SAFETY_STATUS: &str = "Home_Safety_Status__c";
pub const LETHAL_MEANS_ACCESS: &str = "Lethal_Means_Access__c";

// Cognition (step 9)
pub const ORIENTATION: &str = "Orientation__c";
pub const COGNITION_NOTES: &str = "Cognition_Notes__c";

// Collection entry fields
pub const MEDICATION_ACTION: &str = "Medication_Action__c";
pub const DOSE_AMOUNT: &str = "Dose_Amount__c";
pub const DOSE_UNIT: &str = "Dose_Unit__c";
pub const USE_FREQUENCY: &str = "Use_Frequency__c";
pub const SCREENER_SCORE: &str = "Screener_Score__c";
pub const RISK_LEVEL: &str = "Risk_Level__c";
pub const RELATIONSHIP: &str = "Relationship__c";

// Sentinel picklist values
pub const IDEATION_NONE: &str = "None";
pub const HOME_SAFETY_SAFE: &str = "Safe";
pub const ORIENTATION_ALERT: &str = "Alert & oriented (x3)";

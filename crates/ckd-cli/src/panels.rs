//! Static narrative panels.
//!
//! Fixed explanatory copy shown by the read-only info subcommands. The text
//! describes the offline modeling work; none of it is computed at runtime.

pub const OVERVIEW: &str = "\
Research Context & Clinical Significance
========================================

Clinical Significance
---------------------
Chronic Kidney Disease affects 10% of the global population with:
  - 40% undiagnosed in early stages
  - 2x increased cardiovascular risk
  - $84,000 annual treatment cost for late-stage patients

Early detection can reduce progression risk by 60% through:
  - Dietary interventions
  - Blood pressure control
  - Medication management

Key Analytical Findings
-----------------------
Model Performance Metrics:
  - AUC-ROC: 0.97 +/- 0.02
  - F1-Score: 0.93 +/- 0.03
  - Precision: 0.95 +/- 0.04

Critical Biomarkers Identified:
  1. Serum Creatinine (+142% impact)
  2. Hemoglobin (-89% impact)
  3. Hypertension Status (+78% impact)

Data Insights:
  - Non-linear relationships detected in 67% of features
  - 23% missing values handled via MICE imputation
";

pub const METHODOLOGY: &str = "\
Methodology Overview
====================

Model Architecture
------------------
XGBoost Implementation:
  - Gradient Boosted Trees (n=200)
  - Max Depth: 6 layers
  - Learning Rate: 0.01
  - Loss Function: Custom-weighted BCE

Feature Engineering:
  - Outlier Capping (5th-95th percentiles)
  - SMOTE for Class Balancing (1:1 ratio)
  - Interaction Terms: BP x Creatinine

Pipeline Architecture
---------------------
Processing Workflow:
  1. Raw Data Validation -> 2. Missing Value Imputation -> 3. Feature Scaling
  4. Dimensionality Reduction -> 5. Ensemble Modeling -> 6. Probability Calibration

Validation Strategy:
  - Stratified K-Fold Cross Validation (k=10)
  - Bootstrapped Confidence Intervals (n=1000)
  - SHAP Values for Explainability

Clinical Validation
-------------------
External Validation Cohort (n=1,234):
  - Sensitivity: 92.3% (95% CI: 89.1-94.8%)
  - Specificity: 88.7% (95% CI: 85.2-91.4%)

Deployment Considerations:
  - Model Drift Monitoring: Monthly retraining cycle
  - Clinical Decision Support Integration
";

pub const REFERENCE_GUIDE: &str = "\
Clinical Reference Guide
========================

Normal Ranges:
  - Serum Creatinine: 0.7-1.3 mg/dL
  - Hemoglobin: 13.5-17.5 g/dL
  - eGFR: >60 mL/min/1.73m2

Diagnostic Criteria:
  - CKD Stage 1: eGFR >=90 with proteinuria
  - CKD Stage 2: eGFR 60-89
  - CKD Stage 3: eGFR 30-59
";

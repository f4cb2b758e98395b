// LLM prompt text for compensation analysis.
// Reuses the cross-cutting output rules from llm_client::prompts.

/// Compensation analysis prompt.
/// Replace: {employees_json}, {json_output_rules}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert HR compensation analyst. Your task is to analyze the provided employee data.
The currency is not specified, so assume it is consistent across the dataset and provide analysis in the same units (e.g., if salary is in ₹, your suggestions should be in ₹).

Analyze the following employee data:
{employees_json}

Perform the following analysis and return the result as a single JSON object.

1.  **Full Employee Analysis**: For each employee, perform a detailed analysis.
    -   Estimate a fair market salary range (min and max) based on their role, experience, and location.
    -   Compare their current salary to this market range and categorize them as 'Underpaid', 'Fairly Paid', or 'Overpaid'.
    -   Suggest a new salary if an adjustment is needed. The suggested salary should be a concrete number.
    -   Provide a brief justification for your recommendation.

2.  **Overall Equity Score**: Calculate an overall equity score for the company from 0 to 100, where 100 represents perfect pay equity and fairness.

3.  **Executive Summary**: Write a brief summary of your key findings, highlighting major trends or issues.

4.  **Pay Status Distribution**: Count the number of employees in each category ('Underpaid', 'Fairly Paid', 'Overpaid').

5.  **Salary by Department**: Calculate the average salary for each department.

{json_output_rules}

**JSON Structure:**
The JSON object must conform to this exact structure:
{
  "analyzed_employees": [
    {
      "employee_id": "string",
      "name": "string",
      "department": "string",
      "role": "string",
      "current_salary": number,
      "experience_years": number,
      "performance_rating": number,
      "location": "string",
      "market_salary_min": number,
      "market_salary_max": number,
      "pay_status": "Underpaid" | "Fairly Paid" | "Overpaid",
      "suggested_salary": number,
      "justification": "string"
    }
  ],
  "equity_score": number,
  "summary": "string",
  "pay_status_distribution": {
    "underpaid_count": number,
    "fairly_paid_count": number,
    "overpaid_count": number
  },
  "salary_by_department": [
    { "name": "string", "avgSalary": number }
  ]
}"#;

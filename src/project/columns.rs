//! Column names used by the provider, as constants.

// identifiers
pub const TICKER: &str = "Ticker";
pub const SIMFIN_ID: &str = "SimFinId";
pub const FISCAL_YEAR: &str = "Fiscal Year";
pub const FISCAL_PERIOD: &str = "Fiscal Period";
pub const PUBLISH_DATE: &str = "Publish Date";
pub const REPORT_DATE: &str = "Report Date";
pub const DATE: &str = "Date";

// profit & loss
pub const REVENUE: &str = "Revenue";
pub const COST_OF_REVENUE: &str = "Cost of Revenue";
pub const OPERATING_EXPENSE: &str = "Operating Expense";
pub const SELLING_AND_MARKETING: &str = "Selling & Marketing";
pub const GENERAL_AND_ADMINISTRATIVE: &str = "General & Administrative";
pub const RESEARCH_AND_DEVELOPMENT: &str = "Research & Development";
pub const OPERATING_INCOME: &str = "Operating Income (Loss)";
pub const NON_OPERATING_INCOME: &str = "Non-Operating Income (Loss)";
pub const GROSS_PROFIT: &str = "Gross Profit";
pub const NET_INCOME: &str = "Net Income";

// balance sheet
pub const CASH_AND_EQUIVALENTS: &str = "Cash & Cash Equivalents";
pub const SHORT_TERM_INVESTMENTS: &str = "Short Term Investments";
pub const ACCOUNTS_AND_NOTES_RECEIVABLE: &str = "Accounts & Notes Receivable";
pub const INVENTORIES: &str = "Inventories";
pub const TOTAL_CURRENT_ASSETS: &str = "Total Current Assets";
pub const TOTAL_NONCURRENT_ASSETS: &str = "Total Noncurrent Assets";
pub const TOTAL_ASSETS: &str = "Total Assets";
pub const ACCOUNTS_PAYABLE: &str = "Accounts Payable";
pub const TOTAL_CURRENT_LIABILITIES: &str = "Total Current Liabilities";
pub const TOTAL_NONCURRENT_LIABILITIES: &str = "Total Noncurrent Liabilities";
pub const TOTAL_LIABILITIES: &str = "Total Liabilities";
pub const RETAINED_EARNINGS: &str = "Retained Earnings";
pub const TOTAL_EQUITY: &str = "Total Equity";

// cash flow & derived
pub const STOCK_BASED_COMPENSATION: &str = "Stock-Based Compensation";
pub const EBITDA: &str = "EBITDA";
pub const TOTAL_DEBT: &str = "Total Debt";
pub const FREE_CASH_FLOW: &str = "Free Cash Flow";
pub const GROSS_PROFIT_MARGIN: &str = "Gross Profit Margin";
pub const OPERATING_MARGIN: &str = "Operating Margin";
pub const NET_PROFIT_MARGIN: &str = "Net Profit Margin";
pub const RETURN_ON_EQUITY: &str = "Return on Equity";
pub const RETURN_ON_ASSETS: &str = "Return on Assets";
pub const FCF_TO_NET_INCOME: &str = "Free Cash Flow to Net Income";
pub const CURRENT_RATIO: &str = "Current Ratio";
pub const LIABILITIES_TO_EQUITY: &str = "Liabilities to Equity Ratio";
pub const DEBT_RATIO: &str = "Debt Ratio";
pub const PIOTROSKI_F_SCORE: &str = "Piotroski F-Score";
pub const RETURN_ON_INVESTED_CAPITAL: &str = "Return On Invested Capital";
pub const NET_DEBT_TO_EBITDA: &str = "Net Debt / EBITDA";
pub const NET_DEBT_TO_EBIT: &str = "Net Debt / EBIT";

// prices & ratios
pub const HIGH: &str = "High";
pub const LOW: &str = "Low";
pub const ADJ_CLOSE: &str = "Adj. Close";
pub const VOLUME: &str = "Volume";
pub const MARKET_CAP: &str = "Market-Cap";
pub const ENTERPRISE_VALUE_TTM: &str = "Enterprise Value (ttm)";
pub const PE_QUARTERLY: &str = "Price to Earnings Ratio (quarterly)";
pub const PE_TTM: &str = "Price to Earnings Ratio (ttm)";
pub const PS_QUARTERLY: &str = "Price to Sales Ratio (quarterly)";
pub const PS_TTM: &str = "Price to Sales Ratio (ttm)";
pub const PFCF_QUARTERLY: &str = "Price to Free Cash Flow (quarterly)";
pub const PFCF_TTM: &str = "Price to Free Cash Flow (ttm)";
pub const EV_EBITDA_TTM: &str = "EV/EBITDA (ttm)";
pub const EV_SALES_TTM: &str = "EV/Sales (ttm)";
pub const EV_FCF_TTM: &str = "EV/FCF (ttm)";
pub const ALTMAN_Z_SCORE_TTM: &str = "Altman Z Score (ttm)";

//! Output formatting module
//!
//! The only place where currency values are rounded for display; the
//! services hand over raw numbers.

use haulbook_app::app::{InvoiceTotals, PaymentStatement, PayrollRun, SubtripInsights};
use haulbook_types::{OutputFormat, Result};

pub fn output_payroll(format: OutputFormat, run: &PayrollRun) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(run)?);
        return Ok(());
    }

    println!("\nDriver Payroll Summary");
    println!("======================");
    println!("Subtrips counted:      {}", run.subtrip_count);
    println!("Trip-wise income:      {:.2}", run.summary.total_trip_wise_income);
    println!("Additional payments:   {:.2}", run.summary.total_additional_payments);
    println!("Deductions:            {:.2}", run.summary.total_deductions);
    println!("----------------------");
    println!("Net income:            {:.2}", run.summary.net_income);
    if run.total_trip_advance > 0.0 {
        println!(
            "\nAdvances already paid on these legs: {:.2}",
            run.total_trip_advance
        );
    }

    Ok(())
}

pub fn output_statement(format: OutputFormat, statement: &PaymentStatement) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(statement)?);
        return Ok(());
    }

    println!("\nTransporter Settlement");
    println!("======================");
    if let Some(ref transporter) = statement.payment.transporter {
        println!("Transporter:       {}", transporter.transport_name);
    }
    println!("Subtrips:          {}", statement.lines.len());

    if !statement.lines.is_empty() {
        println!();
        println!(
            "{:>4} {:>12} {:>14} {:>12} {:>14}",
            "#", "Eff. rate", "Freight", "Expenses", "Payable"
        );
        for (idx, line) in statement.lines.iter().enumerate() {
            println!(
                "{:>4} {:>12.2} {:>14.2} {:>12.2} {:>14.2}",
                idx + 1,
                line.effective_freight_rate,
                line.total_freight_amount,
                line.total_expense,
                line.total_transporter_payment
            );
        }
    }

    println!();
    println!("Trip-wise income:  {:.2}", statement.summary.total_trip_wise_income);
    println!("Shortage:          {:.2}", statement.summary.total_shortage_amount);
    println!("Repayments:        {:.2}", statement.summary.total_repayments);
    println!("----------------------");
    println!("Net income:        {:.2}", statement.summary.net_income);
    println!(
        "After TDS ({:.2}%): {:.2}",
        statement.tds_percent, statement.net_after_tds
    );

    Ok(())
}

pub fn output_invoice(format: OutputFormat, totals: &InvoiceTotals) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(totals)?);
        return Ok(());
    }

    println!("\nInvoice Summary");
    println!("===============");
    if !totals.invoice.invoice_no.is_empty() {
        println!("Invoice:           {}", totals.invoice.invoice_no);
    }
    if let Some(ref customer) = totals.invoice.customer {
        println!("Customer:          {}", customer.customer_name);
    }
    println!("Status:            {}", totals.invoice.invoice_status.label());
    if let Some(date) = totals.invoice.created_date {
        println!("Created:           {}", date.format("%d-%m-%Y"));
    }
    if let Some(date) = totals.invoice.due_date {
        println!("Due:               {}", date.format("%d-%m-%Y"));
    }

    println!();
    println!("Freight weight:    {:.2} t", totals.summary.total_freight_wt);
    println!("Shortage weight:   {:.2} t", totals.summary.total_shortage_wt);
    println!("Freight amount:    {:.2}", totals.summary.total_freight_amount);
    println!("Shortage amount:   {:.2}", totals.summary.total_shortage_amount);
    println!("Before tax:        {:.2}", totals.summary.total_amount_before_tax);
    println!(
        "CGST + SGST:       {:.2}% + {:.2}%",
        totals.tax_percent, totals.tax_percent
    );
    println!("----------------------");
    println!("Total after tax:   {:.2}", totals.summary.total_after_tax);

    Ok(())
}

pub fn output_insights(format: OutputFormat, scanned: &[SubtripInsights]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(scanned)?);
        return Ok(());
    }

    let flagged = scanned.iter().filter(|s| !s.insights.is_empty()).count();
    println!("\nRoute Deviation Scan");
    println!("====================");
    println!("Subtrips scanned:  {}", scanned.len());
    println!("With deviations:   {}", flagged);

    for entry in scanned {
        if entry.insights.is_empty() {
            continue;
        }
        println!();
        match entry.vehicle_no {
            Some(ref vehicle_no) => println!("{} ({})", entry.subtrip_id, vehicle_no),
            None => println!("{}", entry.subtrip_id),
        }
        for insight in &entry.insights {
            println!("  [{}] {}", insight.kind.label(), insight.message);
        }
    }

    Ok(())
}

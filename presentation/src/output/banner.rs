//! Welcome banner for interactive sessions.

use colored::Colorize;

/// The banner printed when an interactive session starts. Printed by the
/// binary, never by the loop; it is not part of the transcript.
pub fn welcome_banner() -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n\n",
        "Welcome to onebox! Try out the following questions:".bold()
    ));

    output.push_str(&format!("{}\n", "Expressions:".cyan().bold()));
    output.push_str("  - 25 / 5\n");
    output.push_str("  - 2 * PI\n");

    output.push_str(&format!("{}\n", "Date and Time:".cyan().bold()));
    output.push_str("  - two days from now\n");
    output.push_str("  - 5 minutes ago\n");
    output.push_str("  - bangkok time\n");
    output.push_str("  - 10pm bangkok time in indiana time\n");

    output.push_str(&format!("{}\n", "Currency:".cyan().bold()));
    output.push_str("  - 100 USD to GBP\n");
    output.push_str("  - GBP to USD\n");

    output.push_str(&format!("{}\n", "Unit Conversion:".cyan().bold()));
    output.push_str("  - 10 KG to lbs\n");
    output.push_str("  - 25 C to F\n");

    output.push_str(&format!(
        "\nAnswers are numbered: reference earlier ones with {}, {}, ...\nwhere the number is the prompt number. Type {} to leave.\n",
        "var0".yellow(),
        "var1".yellow(),
        "exit".yellow()
    ));

    output
}

//! Built-in catalog data.

use super::Catalog;

const SETTINGS: &[&str] = &[
    "Suite Setup",
    "Suite Teardown",
    "Test Setup",
    "Test Teardown",
    "Force Tags",
    "Default Tags",
    "Resource",
    "Library",
];

const BUILTIN: &[&str] = &[
    "Call Method", "Catenate", "Comment", "Continue For Loop", "Continue For Loop If",
    "Convert To Binary", "Convert To Boolean", "Convert To Bytes", "Convert To Hex",
    "Convert To Integer", "Convert To Number", "Convert To Octal", "Convert To String",
    "Create Dictionary", "Create List", "Evaluate", "Exit For Loop", "Exit For Loop If",
    "Fail", "Fatal Error", "Get Count", "Get Length", "Get Library Instance", "Get Time",
    "Get Variable Value", "Get Variables", "Import Library", "Import Resource",
    "Import Variables", "Keyword Should Exist", "Length Should Be", "Log", "Log Many",
    "Log To Console", "Log Variables", "No Operation", "Pass Execution", "Pass Execution If",
    "Regexp Escape", "Reload Library", "Remove Tags", "Repeat Keyword", "Replace Variables",
    "Return From Keyword", "Return From Keyword If", "Run Keyword",
    "Run Keyword And Continue On Failure", "Run Keyword And Expect Error",
    "Run Keyword And Ignore Error", "Run Keyword And Return", "Run Keyword And Return If",
    "Run Keyword And Return Status", "Run Keyword If",
    "Run Keyword If All Critical Tests Passed", "Run Keyword If All Tests Passed",
    "Run Keyword If Any Critical Tests Failed", "Run Keyword If Any Tests Failed",
    "Run Keyword If Test Failed", "Run Keyword If Test Passed",
    "Run Keyword If Timeout Occurred", "Run Keyword Unless", "Run Keywords",
    "Set Global Variable", "Set Library Search Order", "Set Log Level",
    "Set Suite Documentation", "Set Suite Metadata", "Set Suite Variable", "Set Tags",
    "Set Test Documentation", "Set Test Message", "Set Test Variable", "Set Variable",
    "Set Variable If", "Should Be Empty", "Should Be Equal", "Should Be Equal As Integers",
    "Should Be Equal As Numbers", "Should Be Equal As Strings", "Should Be True",
    "Should Contain", "Should Contain X Times", "Should End With", "Should Match",
    "Should Match Regexp", "Should Not Be Empty", "Should Not Be Equal",
    "Should Not Be Equal As Integers", "Should Not Be Equal As Numbers",
    "Should Not Be Equal As Strings", "Should Not Be True", "Should Not Contain",
    "Should Not End With", "Should Not Match", "Should Not Match Regexp",
    "Should Not Start With", "Should Start With", "Sleep", "Variable Should Exist",
    "Variable Should Not Exist", "Wait Until Keyword Succeeds",
];

const COLLECTIONS: &[&str] = &[
    "Append To List", "Combine Lists", "Convert To Dictionary", "Convert To List",
    "Copy Dictionary", "Copy List", "Count Values In List", "Dictionaries Should Be Equal",
    "Dictionary Should Contain Item", "Dictionary Should Contain Key",
    "Dictionary Should Contain Sub Dictionary", "Dictionary Should Contain Value",
    "Dictionary Should Not Contain Key", "Dictionary Should Not Contain Value",
    "Get Dictionary Items", "Get Dictionary Keys", "Get Dictionary Values",
    "Get From Dictionary", "Get From List", "Get Index From List", "Get Match Count",
    "Get Matches", "Get Slice From List", "Insert Into List", "Keep In Dictionary",
    "List Should Contain Sub List", "List Should Contain Value",
    "List Should Not Contain Duplicates", "List Should Not Contain Value",
    "Lists Should Be Equal", "Log Dictionary", "Log List", "Pop From Dictionary",
    "Remove Duplicates", "Remove From Dictionary", "Remove From List",
    "Remove Values From List", "Reverse List", "Set List Value", "Set To Dictionary",
    "Should Contain Match", "Should Not Contain Match", "Sort List",
];

const DIALOGS: &[&str] = &[
    "Execute Manual Step", "Get Selection From User", "Get Value From User",
    "Pause Execution",
];

const STRING: &[&str] = &[
    "Convert To Lowercase", "Convert To Uppercase", "Decode Bytes To String",
    "Encode String To Bytes", "Fetch From Left", "Fetch From Right",
    "Generate Random String", "Get Line", "Get Line Count", "Get Lines Containing String",
    "Get Lines Matching Pattern", "Get Lines Matching Regexp", "Get Regexp Matches",
    "Get Substring", "Remove String", "Remove String Using Regexp", "Replace String",
    "Replace String Using Regexp", "Should Be Byte String", "Should Be Lowercase",
    "Should Be String", "Should Be Titlecase", "Should Be Unicode String",
    "Should Be Uppercase", "Should Not be String", "Split String", "Split String From Right",
    "Split String To Characters", "Split To Lines",
];

const SELENIUM2: &[&str] = &[
    "Capture Page Screenshot", "Click Button", "Click Element", "Click Image", "Click Link",
    "Close All Browsers", "Close Browser", "Close Window", "Element Should Be Disabled",
    "Element Should Be Enabled", "Element Should Be Visible", "Element Should Contain",
    "Element Should Not Be Visible", "Element Text Should Be", "Execute Javascript",
    "Get Element Attribute", "Get Location", "Get Text", "Get Title", "Get Value",
    "Go Back", "Go To", "Input Password", "Input Text", "Location Should Be",
    "Location Should Contain", "Maximize Browser Window", "Mouse Over", "Open Browser",
    "Page Should Contain", "Page Should Contain Element", "Page Should Not Contain",
    "Page Should Not Contain Element", "Register Keyword To Run On Failure", "Reload Page",
    "Select Checkbox", "Select Frame", "Select From List", "Select Window",
    "Set Selenium Implicit Wait", "Set Selenium Speed", "Set Selenium Timeout",
    "Submit Form", "Switch Browser", "Textfield Should Contain", "Title Should Be",
    "Unselect Checkbox", "Unselect Frame", "Wait Until Element Is Visible",
    "Wait Until Page Contains", "Wait Until Page Contains Element",
];

/// Known libraries without a catalogued keyword list.
const UNCATALOGUED: &[&str] = &[
    "DateTime", "OperatingSystem", "Process", "Remote", "Screenshot", "Telnet", "XML",
];

pub(super) fn build() -> Catalog {
    let mut catalog = Catalog::new("BuiltIn")
        .with_library("BuiltIn", BUILTIN.iter().copied())
        .with_library("Collections", COLLECTIONS.iter().copied())
        .with_library("Dialogs", DIALOGS.iter().copied())
        .with_library("String", STRING.iter().copied())
        .with_settings(SETTINGS.iter().copied());

    for name in UNCATALOGUED {
        catalog = catalog.with_library(*name, std::iter::empty::<&str>());
    }

    catalog.with_library("Selenium2Library", SELENIUM2.iter().copied())
}

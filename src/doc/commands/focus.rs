/*!
# `Focus <name>`

## Purpose
Give input focus to the first window whose name contains `<name>`.

## Remarks
Names shorter than three characters are ignored. A window that cannot
be found is logged and the script continues.

*/

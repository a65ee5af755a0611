/*!
# `Send <text>`

## Purpose
Type text on the target display.

## Remarks
The text is expanded. Shift is pressed for characters that need it.

## Example
```text
Set user alice
Send ${user}\n
```

*/

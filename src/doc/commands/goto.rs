/*!
# `Goto <label>`
Also a line holding only `<label>`.

## Purpose
Call the lines after a label.

## Remarks
The line after the call is remembered for `Return`. `Goto` to a label
that does not exist logs `UNDEFINED LABEL` and moves on. A bare word that
is not a label is ignored. Too many pending calls stop the script with
`CALL STACK TOO DEEP`.

## Example
```text
main
greet
greet
End
label greet
Print hi\n
Return
hi
hi
```

*/

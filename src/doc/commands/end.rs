/*!
# `End`
Also `EndL`.

## Purpose
`End` stops the script. `EndL` prints a newline.

## Remarks
Running off the last line also stops the script.

*/
